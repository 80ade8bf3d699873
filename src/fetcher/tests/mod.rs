use swapi_test_utils::prelude::*;

use crate::{
    error::{retry::ErrorRetryStrategy, FetchError},
    fetcher::{fetch_as, Fetcher, SwapiClient},
};

mod fetch_typed;

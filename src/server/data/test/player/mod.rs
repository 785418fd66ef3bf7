use serde_json::json;
use test_utils::{builder::TestBuilder, fixture};

use crate::server::data::{player::PlayerRepository, store::JsonStore};

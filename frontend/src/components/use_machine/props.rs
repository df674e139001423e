use yew::prelude::*;

use crate::api::ApiHandle;

#[derive(Properties, PartialEq, Clone)]
pub struct UseMachineProps {
    pub api: ApiHandle,
}

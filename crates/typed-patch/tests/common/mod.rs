//! Fixture entities shared by the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use typed_patch::Patchable;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, Patchable)]
pub struct SimpleEntity {
    #[patch(rename = "Foo")]
    pub foo: Option<String>,
    #[patch(rename = "Baz")]
    pub baz: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, Patchable)]
pub struct ListEntity {
    #[patch(rename = "Foo")]
    pub foo: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, Patchable)]
pub struct ArrayEntity {
    #[patch(rename = "Foo")]
    pub foo: VecDeque<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, Patchable)]
pub struct ComplexEntity {
    #[patch(rename = "Bar")]
    pub bar: Option<SimpleEntity>,
    #[patch(rename = "Norf")]
    pub norf: Vec<ListEntity>,
    #[patch(skip)]
    pub revision: u64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, Patchable)]
pub struct Readings {
    pub latest: f64,
    pub history: Vec<f64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, Patchable)]
pub struct Keyword {
    pub r#type: String,
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn three_elements() -> Vec<String> {
    strings(&["Element One", "Element Two", "Element Three"])
}

pub fn complex_with(bar_foo: Option<&str>) -> ComplexEntity {
    ComplexEntity {
        bar: Some(SimpleEntity {
            foo: bar_foo.map(str::to_string),
            baz: None,
        }),
        norf: vec![ListEntity {
            foo: three_elements(),
        }],
        revision: 0,
    }
}

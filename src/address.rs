use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decode::{lenient, number_or_numeric_string};

/// A delivery address, as used to query the store locator.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Address {
    #[serde(rename = "Street", default, deserialize_with = "lenient")]
    pub street: String,
    #[serde(rename = "City", default, deserialize_with = "lenient")]
    pub city: String,
    #[serde(rename = "Region", default, deserialize_with = "lenient")]
    pub region: String,
    #[serde(
        rename = "PostalCode",
        default,
        deserialize_with = "number_or_numeric_string"
    )]
    pub postal_code: u32,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        region: impl Into<String>,
        postal_code: u32,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            region: region.into(),
            postal_code,
        }
    }

    /// First locator line: the street part of the address.
    pub fn line_one(&self) -> &str {
        &self.street
    }

    /// Second locator line: `"<city> <region> <postal code>"`.
    pub fn line_two(&self) -> String {
        format!("{} {} {}", self.city, self.region, self.postal_code)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.line_one(), self.line_two())
    }
}

//! XML structures of the daily rate sheet.
//!
//! ```xml
//! <ValCurs Date="02.03.2024" name="Foreign Currency Market">
//!   <Valute ID="R01235">
//!     <NumCode>840</NumCode>
//!     <CharCode>USD</CharCode>
//!     <Nominal>1</Nominal>
//!     <Name>Доллар США</Name>
//!     <Value>91,3336</Value>
//!     <VunitRate>91,3336</VunitRate>
//!   </Valute>
//! </ValCurs>
//! ```

use quick_xml::events::Event;
use quick_xml::{DeError, Reader};
use serde::{Deserialize, Serialize};

/// Root element of every rate sheet.
const ROOT_ELEMENT: &str = "ValCurs";

/// One day's feed (`ValCurs`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSheet {
    #[serde(rename = "@Date")]
    pub date: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "Valute", default)]
    pub entries: Vec<RateEntry>,
}

/// One currency within a sheet (`Valute`). Numbers stay as served:
/// comma-decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEntry {
    #[serde(rename = "@ID", default)]
    pub id: String,
    #[serde(rename = "NumCode", default)]
    pub num_code: String,
    #[serde(rename = "CharCode")]
    pub char_code: String,
    #[serde(rename = "Nominal")]
    pub nominal: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "VunitRate", default)]
    pub unit_rate: Option<String>,
}

/// Parses already-decoded XML text into a [`RateSheet`].
///
/// Documents whose root is not `ValCurs` are rejected even when their
/// attributes happen to fit.
pub fn parse_rate_sheet(xml: &str) -> Result<RateSheet, DeError> {
    let root = root_element(xml)?;
    if root != ROOT_ELEMENT {
        return Err(DeError::Custom(format!(
            "expected <{ROOT_ELEMENT}> root element, found <{root}>"
        )));
    }

    quick_xml::de::from_str(xml)
}

fn root_element(xml: &str) -> Result<String, DeError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(start) | Event::Empty(start) => {
                let name = start.local_name();
                return Ok(String::from_utf8_lossy(name.as_ref()).into_owned());
            }
            Event::Eof => return Err(DeError::UnexpectedEof),
            _ => {}
        }
    }
}

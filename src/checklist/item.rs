// SPDX-License-Identifier: AGPL-3.0-or-later

use std::convert::TryFrom;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checklist::errors::ChecklistError;
use crate::checklist::ChecklistItemKind;
use crate::id::EntityId;

/// Whether one or several options of an enum item can be picked.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EnumSelectionMode {
    /// Exactly one option.
    Single,

    /// Any number of options.
    Multiple,
}

impl EnumSelectionMode {
    /// Returns the tag as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnumSelectionMode::Single => "single",
            EnumSelectionMode::Multiple => "multiple",
        }
    }
}

impl Default for EnumSelectionMode {
    fn default() -> Self {
        EnumSelectionMode::Single
    }
}

impl FromStr for EnumSelectionMode {
    type Err = ChecklistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(EnumSelectionMode::Single),
            "multiple" => Ok(EnumSelectionMode::Multiple),
            _ => Err(ChecklistError::UnknownSelectionMode(s.to_owned())),
        }
    }
}

impl Display for EnumSelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Answer of a yes / no item.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum YesNoResponse {
    /// "Yes".
    Yes,

    /// "No".
    No,
}

impl YesNoResponse {
    /// Returns the tag as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNoResponse::Yes => "YES",
            YesNoResponse::No => "NO",
        }
    }
}

impl FromStr for YesNoResponse {
    type Err = ChecklistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "YES" => Ok(YesNoResponse::Yes),
            "NO" => Ok(YesNoResponse::No),
            _ => Err(ChecklistError::UnknownYesNoResponse(s.to_owned())),
        }
    }
}

impl Display for YesNoResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// File attached to a files item.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistFile {
    /// Server id, or a temporary id for files uploaded during this session.
    pub id: EntityId,

    /// Original file name.
    pub file_name: String,

    /// Key of the uploaded file in the object store.
    #[serde(default)]
    pub store_key: Option<String>,

    /// File size in bytes.
    #[serde(default)]
    pub size_in_bytes: Option<u64>,
}

/// Radio technology of a scanned cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CellularNetworkType {
    /// CDMA.
    Cdma,

    /// GSM.
    Gsm,

    /// LTE.
    Lte,

    /// WCDMA.
    Wcdma,
}

/// One cell seen during a cellular network scan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellScan {
    /// Radio technology.
    pub network_type: CellularNetworkType,

    /// Signal strength in dBm.
    pub signal_strength: i64,

    /// Cell id.
    #[serde(default, rename = "cellID")]
    pub cell_id: Option<String>,

    /// Mobile country code.
    #[serde(default)]
    pub mobile_country_code: Option<String>,

    /// Mobile network code.
    #[serde(default)]
    pub mobile_network_code: Option<String>,

    /// Operator name.
    #[serde(default)]
    pub operator: Option<String>,
}

/// One access point seen during a Wi-Fi scan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WifiScan {
    /// MAC address of the access point.
    pub bssid: String,

    /// Network name.
    #[serde(default)]
    pub ssid: Option<String>,

    /// Frequency in MHz.
    pub frequency: i64,

    /// Channel number.
    pub channel: i64,

    /// Signal strength in dBm.
    pub strength: i64,
}

/// Kind-specific state of a checklist item, one variant per kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemValue {
    /// Checkbox state.
    Simple {
        /// Box was ticked.
        checked: Option<bool>,
    },

    /// Text answer.
    String {
        /// Answer.
        value: Option<String>,
    },

    /// Options and the picked ones, both comma-joined.
    Enum {
        /// Options to pick from.
        enum_values: Option<String>,

        /// Picked options.
        selected_enum_values: Option<String>,

        /// One or several options can be picked.
        selection_mode: EnumSelectionMode,
    },

    /// Uploaded files.
    Files(Option<Vec<ChecklistFile>>),

    /// Yes / no answer.
    YesNo(Option<YesNoResponse>),

    /// Cellular scan results.
    CellScan(Option<Vec<CellScan>>),

    /// Wi-Fi scan results.
    WifiScan(Option<Vec<WifiScan>>),
}

impl ItemValue {
    /// Returns an unfilled value of the given kind.
    pub fn empty(kind: ChecklistItemKind) -> Self {
        match kind {
            ChecklistItemKind::Simple => ItemValue::Simple { checked: None },
            ChecklistItemKind::String => ItemValue::String { value: None },
            ChecklistItemKind::Enum => ItemValue::Enum {
                enum_values: None,
                selected_enum_values: None,
                selection_mode: EnumSelectionMode::default(),
            },
            ChecklistItemKind::Files => ItemValue::Files(None),
            ChecklistItemKind::YesNo => ItemValue::YesNo(None),
            ChecklistItemKind::CellScan => ItemValue::CellScan(None),
            ChecklistItemKind::WifiScan => ItemValue::WifiScan(None),
        }
    }

    /// Returns the kind of this value.
    pub fn kind(&self) -> ChecklistItemKind {
        match self {
            ItemValue::Simple { .. } => ChecklistItemKind::Simple,
            ItemValue::String { .. } => ChecklistItemKind::String,
            ItemValue::Enum { .. } => ChecklistItemKind::Enum,
            ItemValue::Files(_) => ChecklistItemKind::Files,
            ItemValue::YesNo(_) => ChecklistItemKind::YesNo,
            ItemValue::CellScan(_) => ChecklistItemKind::CellScan,
            ItemValue::WifiScan(_) => ChecklistItemKind::WifiScan,
        }
    }
}

/// One entry of a checklist.
#[derive(Clone, Debug, PartialEq)]
pub struct ChecklistItem {
    /// Server id, or a temporary id for items added during this session.
    pub id: EntityId,

    /// Position within its checklist.
    pub index: Option<i64>,

    /// Question or instruction.
    pub title: String,

    /// Additional explanation shown below the title.
    pub help_text: Option<String>,

    /// Kind-specific state, which also determines the kind of the item.
    pub value: ItemValue,
}

impl ChecklistItem {
    /// Returns a new, unfilled item of the given kind with a temporary id.
    pub fn new(kind: ChecklistItemKind, index: Option<i64>) -> Self {
        Self {
            id: EntityId::temporary(),
            index,
            title: String::new(),
            help_text: None,
            value: ItemValue::empty(kind),
        }
    }

    /// Returns the kind of this item.
    pub fn kind(&self) -> ChecklistItemKind {
        self.value.kind()
    }

    /// Decodes an item from the JSON shape returned by the API.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ChecklistError> {
        let raw: RawChecklistItem =
            serde_json::from_value(value).map_err(|err| ChecklistError::Decode(err.to_string()))?;
        Self::try_from(raw)
    }
}

/// Flat checklist item record as returned by the API.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChecklistItem {
    id: EntityId,
    #[serde(default)]
    index: Option<i64>,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    help_text: Option<String>,
    #[serde(default)]
    checked: Option<bool>,
    #[serde(default)]
    string_value: Option<String>,
    #[serde(default)]
    enum_values: Option<String>,
    #[serde(default)]
    selected_enum_values: Option<String>,
    #[serde(default)]
    enum_selection_mode: Option<String>,
    #[serde(default)]
    yes_no_response: Option<String>,
    #[serde(default)]
    files: Option<Vec<ChecklistFile>>,
    #[serde(default)]
    cell_data: Option<Vec<CellScan>>,
    #[serde(default)]
    wifi_data: Option<Vec<WifiScan>>,
}

impl TryFrom<RawChecklistItem> for ChecklistItem {
    type Error = ChecklistError;

    fn try_from(raw: RawChecklistItem) -> Result<Self, Self::Error> {
        let value = match raw.kind.parse::<ChecklistItemKind>()? {
            ChecklistItemKind::Simple => ItemValue::Simple {
                checked: raw.checked,
            },
            ChecklistItemKind::String => ItemValue::String {
                value: raw.string_value,
            },
            ChecklistItemKind::Enum => ItemValue::Enum {
                enum_values: raw.enum_values,
                selected_enum_values: raw.selected_enum_values,
                selection_mode: match raw.enum_selection_mode {
                    Some(mode) => mode.parse()?,
                    None => EnumSelectionMode::default(),
                },
            },
            ChecklistItemKind::Files => ItemValue::Files(raw.files),
            ChecklistItemKind::YesNo => ItemValue::YesNo(match raw.yes_no_response {
                Some(response) => Some(response.parse()?),
                None => None,
            }),
            ChecklistItemKind::CellScan => ItemValue::CellScan(raw.cell_data),
            ChecklistItemKind::WifiScan => ItemValue::WifiScan(raw.wifi_data),
        };

        Ok(Self {
            id: raw.id,
            index: raw.index,
            title: raw.title,
            help_text: raw.help_text,
            value,
        })
    }
}

impl<'de> Deserialize<'de> for ChecklistItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawChecklistItem::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ChecklistItem, EnumSelectionMode, ItemValue, YesNoResponse};
    use crate::checklist::{ChecklistError, ChecklistItemKind};

    #[test]
    fn decodes_enum_item() {
        let item = ChecklistItem::from_json(json!({
            "id": "1",
            "index": 3,
            "type": "enum",
            "title": "Antenna orientation",
            "enumValues": "north,south",
            "selectedEnumValues": "south",
            "enumSelectionMode": "multiple",
            "checked": true,
        }))
        .unwrap();

        assert_eq!(item.kind(), ChecklistItemKind::Enum);
        assert_eq!(
            item.value,
            ItemValue::Enum {
                enum_values: Some("north,south".into()),
                selected_enum_values: Some("south".into()),
                selection_mode: EnumSelectionMode::Multiple,
            }
        );
    }

    #[test]
    fn decodes_yes_no_item() {
        let item: ChecklistItem = serde_json::from_value(json!({
            "id": "2",
            "type": "yes_no",
            "title": "Is the cabinet locked?",
            "yesNoResponse": "NO",
        }))
        .unwrap();

        assert_eq!(item.value, ItemValue::YesNo(Some(YesNoResponse::No)));
    }

    #[test]
    fn decodes_wifi_scan_item() {
        let item = ChecklistItem::from_json(json!({
            "id": "3",
            "type": "wifi_scan",
            "wifiData": [{
                "bssid": "00:11:22:33:44:55",
                "ssid": "office",
                "frequency": 2412,
                "channel": 1,
                "strength": -40,
            }],
        }))
        .unwrap();

        match item.value {
            ItemValue::WifiScan(Some(scans)) => assert_eq!(scans[0].channel, 1),
            value => panic!("Unexpected value {:?}", value),
        }
    }

    #[test]
    fn rejects_unknown_values() {
        let result = ChecklistItem::from_json(json!({
            "id": "2",
            "type": "yes_no",
            "yesNoResponse": "MAYBE",
        }));
        assert_eq!(
            result.unwrap_err(),
            ChecklistError::UnknownYesNoResponse("MAYBE".into())
        );

        let result = ChecklistItem::from_json(json!({ "id": "2", "type": "photo" }));
        assert_eq!(result.unwrap_err(), ChecklistError::UnknownKind("photo".into()));
    }

    #[test]
    fn new_items_are_unfilled() {
        let item = ChecklistItem::new(ChecklistItemKind::Files, Some(0));
        assert!(item.id.is_temporary());
        assert_eq!(item.value, ItemValue::Files(None));
    }
}

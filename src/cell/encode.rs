//! Serde hooks for cells.
//!
//! A cell encodes as its content and decodes into a fresh Populated cell.
//! Sharing is not recorded: two holders of one cell decode into two distinct
//! cells. An encoder that must preserve sharing memoizes on
//! [`IndirectionCell::id`] itself.

use serde::{ser, Deserialize, Deserializer, Serialize, Serializer};

use super::indirection::IndirectionCell;

impl<T: Serialize> Serialize for IndirectionCell<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.with(|value| value.serialize(serializer)) {
            Ok(encoded) => encoded,
            Err(err) => Err(<S::Error as ser::Error>::custom(err)),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for IndirectionCell<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(IndirectionCell::new)
    }
}

/// Decodes an optional value into a cell, Empty for `None`.
///
/// For use with `#[serde(deserialize_with = "...")]` on fields whose cell may
/// legitimately still be unbound when written.
///
/// # Errors
///
/// Whatever the underlying deserializer reports.
pub fn deserialize_optional<'de, D, T>(deserializer: D) -> Result<IndirectionCell<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(IndirectionCell::from_option)
}

/// Encodes a cell as an optional value, `None` when Empty.
///
/// Pairs with [`deserialize_optional`].
///
/// # Errors
///
/// Whatever the underlying serializer reports.
pub fn serialize_optional<S, T>(cell: &IndirectionCell<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    if !cell.is_populated() {
        return serializer.serialize_none();
    }
    match cell.with(|value| serializer.serialize_some(value)) {
        Ok(encoded) => encoded,
        Err(err) => Err(<S::Error as ser::Error>::custom(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Frame {
        label: String,
        #[serde(
            serialize_with = "serialize_optional",
            deserialize_with = "deserialize_optional"
        )]
        pending: IndirectionCell<u32>,
    }

    #[test]
    fn populated_cell_encodes_as_content() {
        let cell = IndirectionCell::new(vec![1, 2]);
        assert_eq!(serde_json::to_string(&cell).unwrap(), "[1,2]");
    }

    #[test]
    fn empty_cell_refuses_to_encode() {
        let cell: IndirectionCell<u8> = IndirectionCell::empty();
        let err = serde_json::to_string(&cell).unwrap_err();
        assert!(err.to_string().contains("cell is empty"));
    }

    #[test]
    fn decoding_allocates_a_new_cell() {
        let cell = IndirectionCell::new(String::from("x"));
        let json = serde_json::to_string(&cell).unwrap();
        let back: IndirectionCell<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get().unwrap(), "x");
        assert!(!back.ptr_eq(&cell));
    }

    #[test]
    fn shared_holders_are_not_shared_after_decode() {
        let cell = IndirectionCell::new(1u8);
        let pair = (cell.clone(), cell);
        let json = serde_json::to_string(&pair).unwrap();
        let (a, b): (IndirectionCell<u8>, IndirectionCell<u8>) = serde_json::from_str(&json).unwrap();
        assert_ne!(a, b);
        a.set(2);
        assert_eq!(b.get(), Ok(1));
    }

    #[test]
    fn optional_field_round_trips_empty_and_populated() {
        let frame = Frame {
            label: "f".into(),
            pending: IndirectionCell::empty(),
        };
        let json = serde_json::to_string(&frame).unwrap();
        assert_eq!(json, r#"{"label":"f","pending":null}"#);
        let back: Frame = serde_json::from_str(&json).unwrap();
        assert!(!back.pending.is_populated());

        frame.pending.set(4);
        let json = serde_json::to_string(&frame).unwrap();
        let back: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(back.label, "f");
        assert_eq!(back.pending.get(), Ok(4));
    }
}

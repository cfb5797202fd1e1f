//! Адаптеры сериализации для нестандартных форматов коллаборатора.

/// Флаг `active` категории: коллаборатор пишет `0`/`1`, но встречаются и
/// булевы значения. Сериализуем всегда в число, принимаем оба варианта.
pub mod bool_as_int {
    use serde::de::{self, Deserializer, Unexpected};
    use serde::ser::Serializer;
    use serde::Deserialize;

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum IntOrBool {
            Int(i64),
            Bool(bool),
        }

        match IntOrBool::deserialize(deserializer)? {
            IntOrBool::Bool(b) => Ok(b),
            IntOrBool::Int(0) => Ok(false),
            IntOrBool::Int(1) => Ok(true),
            IntOrBool::Int(other) => Err(de::Error::invalid_value(
                Unexpected::Signed(other),
                &"0 or 1",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Flagged {
        #[serde(with = "super::bool_as_int")]
        active: bool,
    }

    #[test]
    fn serializes_to_integer() {
        let json = serde_json::to_string(&Flagged { active: false }).unwrap();
        assert_eq!(json, r#"{"active":0}"#);
        let json = serde_json::to_string(&Flagged { active: true }).unwrap();
        assert_eq!(json, r#"{"active":1}"#);
    }

    #[test]
    fn accepts_integer_and_bool() {
        let f: Flagged = serde_json::from_str(r#"{"active":1}"#).unwrap();
        assert!(f.active);
        let f: Flagged = serde_json::from_str(r#"{"active":false}"#).unwrap();
        assert!(!f.active);
    }

    #[test]
    fn rejects_other_integers() {
        assert!(serde_json::from_str::<Flagged>(r#"{"active":2}"#).is_err());
    }
}

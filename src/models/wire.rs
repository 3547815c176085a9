use serde::{de::Visitor, Deserialize, Deserializer, Serializer};
use std::fmt;

/// El backend envía ids y cantidades como número (`7`) o como texto (`"7"`).
/// En el cliente siempre se manejan como `String`.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(StringOrNumberVisitor)
}

/// Igual que `string_or_number` pero admite `null` o campo ausente
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OptVisitor;

    impl<'de> Visitor<'de> for OptVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("id (number or string) or null")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(StringOrNumberVisitor).map(Some)
        }
    }

    deserializer.deserialize_option(OptVisitor)
}

/// Listas que el backend a veces devuelve como `null`
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Los ids numéricos vuelven al backend como número; el resto como texto
pub fn id_as_number<S>(id: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id.parse::<i64>() {
        Ok(n) => serializer.serialize_i64(n),
        Err(_) => serializer.serialize_str(id),
    }
}

pub fn opt_id_as_number<S>(id: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(id) => id_as_number(id, serializer),
        None => serializer.serialize_none(),
    }
}

struct StringOrNumberVisitor;

impl<'de> Visitor<'de> for StringOrNumberVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("id as number or string")
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(value.to_string())
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(value.to_string())
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if value.fract() == 0.0 {
            Ok(format!("{}", value as i64))
        } else {
            Err(E::custom(format!("id no entero: {}", value)))
        }
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(value.to_string())
    }

    // `"cantidad": null` llega en recetas antiguas
    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(String::new())
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "string_or_number")]
        id: String,
        #[serde(default, deserialize_with = "opt_string_or_number")]
        otro: Option<String>,
    }

    #[test]
    fn test_numeric_and_string_ids() {
        let a: Sample = serde_json::from_str(r#"{"id": 42, "otro": "9"}"#).unwrap();
        assert_eq!(a.id, "42");
        assert_eq!(a.otro.as_deref(), Some("9"));

        let b: Sample = serde_json::from_str(r#"{"id": "abc", "otro": null}"#).unwrap();
        assert_eq!(b.id, "abc");
        assert_eq!(b.otro, None);
    }

    #[test]
    fn test_missing_optional_id() {
        let c: Sample = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(c.otro, None);
    }

    #[derive(Deserialize)]
    struct WithList {
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<String>,
    }

    #[derive(Serialize)]
    struct Outgoing {
        #[serde(serialize_with = "id_as_number")]
        id: String,
    }

    #[test]
    fn test_null_list_becomes_empty() {
        let a: WithList = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(a.items.is_empty());
        let b: WithList = serde_json::from_str(r#"{}"#).unwrap();
        assert!(b.items.is_empty());
    }

    #[test]
    fn test_outgoing_ids() {
        let numeric = serde_json::to_string(&Outgoing { id: "12".to_string() }).unwrap();
        assert_eq!(numeric, r#"{"id":12}"#);
        let text = serde_json::to_string(&Outgoing { id: "u-1".to_string() }).unwrap();
        assert_eq!(text, r#"{"id":"u-1"}"#);
    }

    #[test]
    fn test_rejects_fractional_id() {
        assert!(serde_json::from_str::<Sample>(r#"{"id": 1.5}"#).is_err());
    }
}

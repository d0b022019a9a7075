//! Contains custom deserialization functions for the loosely-typed Steam inventory responses.

use std::marker::PhantomData;
use std::fmt;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::{self, MapAccess, Visitor, SeqAccess, Deserializer, Unexpected};

/// Deserializes an optional ID which Steam may send as either a string or a number. Numbers are
/// converted to their decimal string form.
pub fn option_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OptionVisitor;
    
    impl<'de> Visitor<'de> for OptionVisitor {
        type Value = Option<String>;
        
        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, a number or null")
        }
        
        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
        
        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
        
        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }
        
        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_string()))
        }
        
        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_string()))
        }
        
        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_string()))
        }
        
        fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v))
        }
    }
    
    deserializer.deserialize_option(OptionVisitor)
}

/// Deserializes a keyed object into an [`IndexMap`] preserving document order. The legacy
/// inventory endpoint sends an empty array in place of an empty object, which is accepted as an
/// empty map.
pub fn map_or_empty_seq<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct MapVisitor<T> {
        marker: PhantomData<T>,
    }
    
    impl<T> MapVisitor<T> {
        pub fn new() -> Self {
            Self {
                marker: PhantomData,
            }
        }
    }
    
    impl<'de, T> Visitor<'de> for MapVisitor<T>
    where
        T: Deserialize<'de>,
    {
        type Value = IndexMap<String, T>;
        
        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map")
        }
        
        fn visit_seq<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
        where
            V: SeqAccess<'de>,
        {
            if visitor.next_element::<de::IgnoredAny>()?.is_some() {
                return Err(de::Error::invalid_value(
                    Unexpected::Seq,
                    &"an empty array",
                ));
            }
            
            Ok(IndexMap::new())
        }
        
        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(IndexMap::new())
        }
        
        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(IndexMap::new())
        }
        
        fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut items = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
            
            while let Some((key, value)) = access.next_entry::<String, T>()? {
                items.insert(key, value);
            }
            
            Ok(items)
        }
    }
    
    deserializer.deserialize_any(MapVisitor::new())
}

/// Deserializes an optional list which may be sent as an array, a keyed object, an empty string
/// or null. An empty string and null are both treated as absent.
pub fn option_seq_or_map<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct SeqOrMapVisitor<T> {
        marker: PhantomData<Vec<T>>,
    }
    
    impl<T> SeqOrMapVisitor<T> {
        pub fn new() -> Self {
            Self {
                marker: PhantomData,
            }
        }
    }
    
    impl<'de, T> Visitor<'de> for SeqOrMapVisitor<T>
    where
        T: Deserialize<'de>,
    {
        type Value = Option<Vec<T>>;
        
        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a sequence or a map")
        }
        
        fn visit_seq<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
        where
            V: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            
            while let Some(v) = visitor.next_element::<T>()? {
                vec.push(v);
            }
            
            Ok(Some(vec))
        }
        
        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
        
        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
        
        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }
        
        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match v {
                "" => Ok(None),
                other => Err(de::Error::invalid_value(
                    Unexpected::Str(other),
                    &"an empty string",
                )),
            }
        }
        
        fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut items = Vec::new();
            
            while let Some((_key, v)) = access.next_entry::<String, T>()? {
                items.push(v);
            }
            
            Ok(Some(items))
        }
    }
    
    deserializer.deserialize_option(SeqOrMapVisitor::new())
}

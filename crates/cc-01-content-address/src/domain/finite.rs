//! Non-finite float detection.
//!
//! `serde_json` writes `NaN` and `±inf` as `null`, which would give them the
//! same address as an explicit null. This pass walks the payload through
//! serde before conversion and stops at the first non-finite float.

use serde::ser::{self, Serialize};

use super::errors::EncodingError;

/// Fail if any `f32`/`f64` reachable from `payload` is NaN or infinite.
pub(crate) fn ensure_finite<T: Serialize + ?Sized>(payload: &T) -> Result<(), EncodingError> {
    let mut check = FiniteCheck::default();
    match payload.serialize(&mut check) {
        Ok(()) => Ok(()),
        Err(err) => match check.found {
            Some(value) => Err(EncodingError::NonFinite { value }),
            None => Err(EncodingError::Serialize(err)),
        },
    }
}

#[derive(Default)]
struct FiniteCheck {
    found: Option<f64>,
}

impl FiniteCheck {
    fn float(&mut self, value: f64) -> Result<(), serde_json::Error> {
        if value.is_finite() {
            return Ok(());
        }
        self.found = Some(value);
        Err(ser::Error::custom("non-finite float"))
    }
}

type Check = Result<(), serde_json::Error>;

impl<'a> ser::Serializer for &'a mut FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    fn serialize_f32(self, v: f32) -> Check {
        self.float(f64::from(v))
    }
    fn serialize_f64(self, v: f64) -> Check {
        self.float(v)
    }

    fn serialize_bool(self, _: bool) -> Check {
        Ok(())
    }
    fn serialize_i8(self, _: i8) -> Check {
        Ok(())
    }
    fn serialize_i16(self, _: i16) -> Check {
        Ok(())
    }
    fn serialize_i32(self, _: i32) -> Check {
        Ok(())
    }
    fn serialize_i64(self, _: i64) -> Check {
        Ok(())
    }
    fn serialize_i128(self, _: i128) -> Check {
        Ok(())
    }
    fn serialize_u8(self, _: u8) -> Check {
        Ok(())
    }
    fn serialize_u16(self, _: u16) -> Check {
        Ok(())
    }
    fn serialize_u32(self, _: u32) -> Check {
        Ok(())
    }
    fn serialize_u64(self, _: u64) -> Check {
        Ok(())
    }
    fn serialize_u128(self, _: u128) -> Check {
        Ok(())
    }
    fn serialize_char(self, _: char) -> Check {
        Ok(())
    }
    fn serialize_str(self, _: &str) -> Check {
        Ok(())
    }
    fn serialize_bytes(self, _: &[u8]) -> Check {
        Ok(())
    }
    fn serialize_none(self) -> Check {
        Ok(())
    }
    fn serialize_unit(self) -> Check {
        Ok(())
    }
    fn serialize_unit_struct(self, _: &'static str) -> Check {
        Ok(())
    }
    fn serialize_unit_variant(self, _: &'static str, _: u32, _: &'static str) -> Check {
        Ok(())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Check {
        value.serialize(self)
    }
    fn serialize_newtype_struct<T: Serialize + ?Sized>(self, _: &'static str, value: &T) -> Check {
        value.serialize(self)
    }
    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        value: &T,
    ) -> Check {
        value.serialize(self)
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Self, serde_json::Error> {
        Ok(self)
    }
    fn serialize_tuple(self, _: usize) -> Result<Self, serde_json::Error> {
        Ok(self)
    }
    fn serialize_tuple_struct(self, _: &'static str, _: usize) -> Result<Self, serde_json::Error> {
        Ok(self)
    }
    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self, serde_json::Error> {
        Ok(self)
    }
    fn serialize_map(self, _: Option<usize>) -> Result<Self, serde_json::Error> {
        Ok(self)
    }
    fn serialize_struct(self, _: &'static str, _: usize) -> Result<Self, serde_json::Error> {
        Ok(self)
    }
    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self, serde_json::Error> {
        Ok(self)
    }
}

impl<'a> ser::SerializeSeq for &'a mut FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;
    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Check {
        value.serialize(&mut **self)
    }
    fn end(self) -> Check {
        Ok(())
    }
}

impl<'a> ser::SerializeTuple for &'a mut FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;
    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Check {
        value.serialize(&mut **self)
    }
    fn end(self) -> Check {
        Ok(())
    }
}

impl<'a> ser::SerializeTupleStruct for &'a mut FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;
    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Check {
        value.serialize(&mut **self)
    }
    fn end(self) -> Check {
        Ok(())
    }
}

impl<'a> ser::SerializeTupleVariant for &'a mut FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;
    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Check {
        value.serialize(&mut **self)
    }
    fn end(self) -> Check {
        Ok(())
    }
}

impl<'a> ser::SerializeMap for &'a mut FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;
    // Key shape is left to serde_json; only values can hold floats it accepts.
    fn serialize_key<T: Serialize + ?Sized>(&mut self, _: &T) -> Check {
        Ok(())
    }
    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Check {
        value.serialize(&mut **self)
    }
    fn end(self) -> Check {
        Ok(())
    }
}

impl<'a> ser::SerializeStruct for &'a mut FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;
    fn serialize_field<T: Serialize + ?Sized>(&mut self, _: &'static str, value: &T) -> Check {
        value.serialize(&mut **self)
    }
    fn end(self) -> Check {
        Ok(())
    }
}

impl<'a> ser::SerializeStructVariant for &'a mut FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;
    fn serialize_field<T: Serialize + ?Sized>(&mut self, _: &'static str, value: &T) -> Check {
        value.serialize(&mut **self)
    }
    fn end(self) -> Check {
        Ok(())
    }
}

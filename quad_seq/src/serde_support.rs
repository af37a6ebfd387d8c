//! Serialization of the sequence types behind the `serde_support` feature
//!
//! A `List` serializes as a plain sequence in traversal order, dropping the
//! backing storage layout. Deserialization rebuilds through a back
//! collector, so a list that was grown from the front round trips to equal
//! elements over a storage order matching traversal order.
//!
//! A `Grid` serializes as a `(shape, flat row-major data)` tuple, and
//! deserialization returns an error if the data length does not match the
//! shape product.
//!
//! ```
//! // Example using the `ron` crate
//! use quad_seq::{Grid, List};
//! use ron::{from_str, to_string};
//!
//! let list: List<u64> = [5, 6, 7].into_iter().collect();
//! let serialized = to_string(&list).unwrap();
//! assert_eq!(serialized, "[5,6,7]");
//! let list: List<u64> = from_str(&serialized).unwrap();
//! assert_eq!(list.iter().copied().collect::<Vec<u64>>(), [5, 6, 7]);
//!
//! let grid = Grid::from_fn(&[2, 2], |i| i as u64);
//! let serialized = to_string(&grid).unwrap();
//! assert_eq!(serialized, "([2,2],[0,1,2,3])");
//! let grid2: Grid<u64> = from_str(&serialized).unwrap();
//! assert_eq!(grid, grid2);
//! ```

use core::{fmt, marker::PhantomData};

use serde::{
    de::{Error, SeqAccess, Visitor},
    ser::{SerializeSeq, SerializeTuple},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{Collectable, Collector, Grid, List};

impl<T: Serialize> Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_seq(Some(self.len()))?;
        for t in self {
            s.serialize_element(t)?;
        }
        s.end()
    }
}

struct ListVisitor<T>(PhantomData<fn() -> T>);

impl<'de, T> Visitor<'de> for ListVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = List<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a `quad_seq` list")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut list = List::new();
        if let Some(hint) = access.size_hint() {
            list.reserve(hint);
        }
        let mut c = list.into_collector();
        while let Some(t) = access.next_element::<T>()? {
            c.collect(t);
        }
        Ok(c.finish())
    }
}

impl<'de, T> Deserialize<'de> for List<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(ListVisitor(PhantomData))
    }
}

impl<T: Serialize> Serialize for Grid<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_tuple(2)?;
        s.serialize_element(&self.shape)?;
        s.serialize_element(&self.data)?;
        s.end()
    }
}

impl<'de, T> Deserialize<'de> for Grid<T>
where
    T: Deserialize<'de>,
{
    /// This function returns an error if the data length does not match the
    /// shape product
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (shape, data): (Vec<usize>, Vec<T>) = Deserialize::deserialize(deserializer)?;
        match Grid::from_vec(&shape, data) {
            Ok(res) => Ok(res),
            Err(_) => Err(Error::custom(
                "when deserializing a `quad_seq` grid, the data length did not match the shape \
                 product",
            )),
        }
    }
}

use std::convert::TryFrom;

use crate::Kind;


#[allow(clippy::float_cmp)]
mod ser;

macro_rules! check_kinds {
    {$($kind:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Kind::$kind), $val);
            assert_eq!(Kind::try_from($val as u8), Ok(Kind::$kind));
        )*
    };
}

#[test]
fn exhaustive_kind_check() {
    check_kinds! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
    }

    for value in 11..=u8::MAX {
        assert!(Kind::try_from(value).is_err())
    }
}

#[test]
fn kind_display_names() {
    assert_eq!(Kind::Int.to_string(), "TAG_Int");
    assert_eq!(Kind::ByteArray.to_string(), "TAG_ByteArray");
    assert_eq!(Kind::Compound.to_string(), "TAG_Compound");
}

#[test]
fn serializes_to_json() {
    use crate::{Compound, List, Tag};

    let mut root = Tag::new("", Compound::new());
    let c = root.as_compound_mut().unwrap();
    c.push("x", 42i32);
    c.push("l", List::new(Kind::Byte, vec![1i8.into()]).unwrap());

    let json = serde_json::to_value(&root).unwrap();
    let expected = serde_json::json!({
        "name": "",
        "payload": {
            "Compound": [
                { "name": "x", "payload": { "Int": 42 } },
                {
                    "name": "l",
                    "payload": {
                        "List": {
                            "element_kind": "Byte",
                            "items": [ { "payload": { "Byte": 1 } } ]
                        }
                    }
                }
            ]
        }
    });

    assert_eq!(json, expected);
}

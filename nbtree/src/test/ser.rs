use super::builder::Builder;
use crate::error::{ErrorKind, Result};
use crate::{encode, from_bytes, to_bytes, to_writer, Compound, Kind, List, Payload, Tag};

fn root_with(name: &str, payload: impl Into<Payload>) -> Tag {
    let mut root = Tag::new("", Compound::new());
    root.as_compound_mut().unwrap().push(name, payload);
    root
}

#[test]
fn root_with_single_int() -> Result<()> {
    let mut root = Tag::new("root", Compound::new());
    root.as_compound_mut().unwrap().push("x", 42i32);

    let bs = to_bytes(&root)?;
    let expected = [
        0x0A, 0x00, 0x04, b'r', b'o', b'o', b't', 0x03, 0x00, 0x01, b'x', 0x00, 0x00, 0x00, 0x2A,
        0x00,
    ];

    assert_eq!(bs, expected);
    assert_eq!(from_bytes(&bs)?, root);
    Ok(())
}

#[test]
fn simple_numbers() -> Result<()> {
    let root: Compound = vec![
        ("i8", Payload::Byte(i8::MAX)),
        ("i16", Payload::Short(i16::MIN)),
        ("i32", Payload::Int(i32::MAX)),
        ("i64", Payload::Long(i64::MIN)),
        ("f32", Payload::Float(f32::MAX)),
        ("f64", Payload::Double(f64::MIN_POSITIVE)),
    ]
    .into_iter()
    .collect();

    let bs = to_bytes(&Tag::new("", root))?;
    let expected = Builder::new()
        .start_compound("")
        .byte("i8", i8::MAX)
        .short("i16", i16::MIN)
        .int("i32", i32::MAX)
        .long("i64", i64::MIN)
        .float("f32", f32::MAX)
        .double("f64", f64::MIN_POSITIVE)
        .end_compound()
        .build();

    assert_eq!(expected, bs);
    Ok(())
}

#[test]
fn strings_and_byte_arrays() -> Result<()> {
    let mut root = Tag::new("", Compound::new());
    let c = root.as_compound_mut().unwrap();
    c.push("empty", "");
    c.push("unicode", "😈 ü");
    c.push("bytes", vec![0u8, 1, 255]);

    let bs = to_bytes(&root)?;
    let expected = Builder::new()
        .start_compound("")
        .string("empty", "")
        .string("unicode", "😈 ü")
        .byte_array("bytes", &[0, 1, 255])
        .end_compound()
        .build();

    assert_eq!(expected, bs);
    Ok(())
}

#[test]
fn list_elements_have_no_header_or_name() -> Result<()> {
    let list = List::new(Kind::Int, vec![1i32.into(), 2i32.into()])?;
    let bs = to_bytes(&root_with("list", list))?;

    let expected = Builder::new()
        .start_compound("")
        .start_list("list", Kind::Int, 2)
        .int_payload(1)
        .int_payload(2)
        .end_compound()
        .build();

    assert_eq!(expected, bs);
    Ok(())
}

#[test]
fn empty_list_keeps_element_kind() -> Result<()> {
    let bs = to_bytes(&root_with("list", List::empty(Kind::String)))?;

    let expected = Builder::new()
        .start_compound("")
        .start_list("list", Kind::String, 0)
        .end_compound()
        .build();

    assert_eq!(expected, bs);
    Ok(())
}

#[test]
fn list_of_compounds() -> Result<()> {
    let a: Compound = vec![("id", "stone")].into_iter().collect();
    let b: Compound = vec![("id", "dirt")].into_iter().collect();
    let list = List::new(Kind::Compound, vec![a.into(), b.into()])?;

    let bs = to_bytes(&root_with("items", list))?;
    let expected = Builder::new()
        .start_compound("")
        .start_list("items", Kind::Compound, 2)
        .string("id", "stone")
        .end_compound()
        .string("id", "dirt")
        .end_compound()
        .end_compound()
        .build();

    assert_eq!(expected, bs);
    Ok(())
}

#[test]
fn encode_without_type_header() -> Result<()> {
    let tag = Tag::new("x", 42i32);

    assert_eq!(encode(&tag, true)?, [3, 0, 1, b'x', 0, 0, 0, 42]);
    assert_eq!(encode(&tag, false)?, [0, 1, b'x', 0, 0, 0, 42]);
    Ok(())
}

#[test]
fn unnamed_list_element_encodes_payload_only() -> Result<()> {
    let list = List::new(Kind::Short, vec![7i16.into()])?;
    let element = list.iter().next().unwrap();

    assert_eq!(encode(element, false)?, [0, 7]);
    Ok(())
}

#[test]
fn to_writer_matches_to_bytes() -> Result<()> {
    let root = root_with("a", 1.5f64);

    let mut out = Vec::new();
    to_writer(&mut out, &root)?;
    assert_eq!(out, to_bytes(&root)?);
    Ok(())
}

#[test]
fn string_too_long() {
    let long = "a".repeat(u16::MAX as usize + 1);
    let err = to_bytes(&root_with("s", long.as_str())).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::LengthOverflow);

    let err = to_bytes(&root_with(&long, 1i8)).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::LengthOverflow);
}

#[test]
fn longest_string_fits() -> Result<()> {
    let long = "a".repeat(u16::MAX as usize);
    let root = root_with("s", long.as_str());

    assert_eq!(from_bytes(&to_bytes(&root)?)?, root);
    Ok(())
}

#[test]
fn list_rejects_other_kinds() {
    let err = List::new(Kind::Int, vec![1i32.into(), 1i64.into()]).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::BadFormat);

    let err = List::new(Kind::End, vec![1i32.into()]).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::BadFormat);

    assert!(List::new(Kind::End, vec![]).is_ok());
}

#[test]
fn compound_mutation_round_trips() -> Result<()> {
    let input = Builder::new()
        .start_compound("Data")
        .long("Time", 100)
        .int("SpawnX", 1)
        .end_compound()
        .build();

    let mut root = from_bytes(&input)?;
    let data = root.as_compound_mut().unwrap();
    assert!(data.remove("Time").is_some());
    assert!(data.remove("Missing").is_none());
    data.push("SpawnZ", -4i32);
    data.push_tag(Tag::new("LevelName", "world"))?;

    let expected = Builder::new()
        .start_compound("Data")
        .int("SpawnX", 1)
        .int("SpawnZ", -4)
        .string("LevelName", "world")
        .end_compound()
        .build();

    assert_eq!(to_bytes(&root)?, expected);
    assert_eq!(from_bytes(&expected)?, root);
    Ok(())
}

#[test]
fn compound_rejects_unnamed_tags() -> Result<()> {
    let list = List::new(Kind::Int, vec![1i32.into()])?;
    let element = list.iter().next().unwrap().clone();

    let mut c = Compound::new();
    let err = c.push_tag(element).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::BadFormat);
    assert!(c.is_empty());
    Ok(())
}

#[test]
fn element_moved_into_compound_gets_a_name() -> Result<()> {
    let list = List::new(Kind::Int, vec![5i32.into()])?;
    let element = list.iter().next().unwrap().clone();

    let mut root = Tag::new("", Compound::new());
    let c = root.as_compound_mut().unwrap();
    assert!(c.push_tag(element.clone()).is_err());
    c.push("moved", element.into_payload());
    c.push("list", list);

    assert!(root.as_compound().unwrap().iter().all(Tag::is_named));

    let decoded = from_bytes(&to_bytes(&root)?)?;
    assert_eq!(decoded, root);
    assert_eq!(decoded.find("moved").map(Tag::payload), Some(&Payload::Int(5)));
    Ok(())
}

#[test]
fn decoded_tree_reencodes_byte_for_byte() -> Result<()> {
    let input = Builder::new()
        .start_compound("Level")
        .byte("Flag", 1)
        .short("Health", 20)
        .int("Score", -1)
        .long("RandomSeed", 0x0123_4567_89ab_cdef)
        .float("Yaw", -90.5)
        .double("X", 1e100)
        .byte_array("Blocks", &[0, 1, 2, 3, 255])
        .string("Name", "Steve")
        .start_list("Pos", Kind::Double, 3)
        .double_payload(0.5)
        .double_payload(64.0)
        .double_payload(-0.5)
        .start_list("Empty", Kind::End, 0)
        .start_list("Entities", Kind::Compound, 1)
        .string("id", "Pig")
        .start_list("Motion", Kind::Float, 2)
        .float_payload(0.0)
        .float_payload(-0.1)
        .end_compound()
        .start_compound("Inner")
        .start_compound("Deeper")
        .end_compound()
        .end_compound()
        .end_compound()
        .build();

    let root = from_bytes(&input)?;
    let bs = to_bytes(&root)?;

    assert_eq!(bs, input);
    assert_eq!(from_bytes(&bs)?, root);
    Ok(())
}

#[test]
fn programmatic_tree_round_trips() -> Result<()> {
    let mut inner = Compound::new();
    inner.push("flag", true);
    inner.push("nums", List::new(Kind::Long, vec![1i64.into(), i64::MAX.into()])?);

    let nested = List::new(
        Kind::List,
        vec![
            List::empty(Kind::Byte).into(),
            List::new(Kind::String, vec!["a".into(), "".into()])?.into(),
        ],
    )?;

    let mut root = Tag::new("root name", Compound::new());
    let c = root.as_compound_mut().unwrap();
    c.push("inner", inner);
    c.push("nested", nested);
    c.push("dup", 1i32);
    c.push("dup", 2i32);

    let decoded = from_bytes(&to_bytes(&root)?)?;
    assert_eq!(decoded, root);

    let dups: Vec<_> = decoded
        .find_all("dup")
        .iter()
        .map(|t| t.payload().as_i64().unwrap())
        .collect();
    assert_eq!(dups, [1, 2]);
    Ok(())
}

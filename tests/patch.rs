#![cfg(feature = "json")]

use nullable::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct User {
    name: String,
    nickname: Nullable<String>,
    age: Nullable<u32>,
}

#[derive(Debug, Deserialize)]
struct UserPatch {
    #[serde(default)]
    nickname: Nullable<String>,
    #[serde(default)]
    age: Nullable<u32>,
}

fn apply(user: &mut User, patch: UserPatch) {
    if patch.nickname.is_initialized() {
        user.nickname = patch.nickname;
    }
    if patch.age.is_initialized() {
        user.age = patch.age;
    }
}

fn alice() -> User {
    User {
        name: "alice".to_string(),
        nickname: valid("al".to_string()),
        age: valid(30),
    }
}

#[test]
fn missing_fields_are_left_alone() -> anyhow::Result<()> {
    let mut user = alice();
    let patch: UserPatch = serde_json::from_str("{}")?;
    assert!(!patch.nickname.is_initialized());
    assert!(!patch.age.is_initialized());

    apply(&mut user, patch);
    assert_eq!(user, alice());
    Ok(())
}

#[test]
fn explicit_null_clears() -> anyhow::Result<()> {
    let mut user = alice();
    let patch: UserPatch = serde_json::from_str(r#"{"nickname": null, "age": 31}"#)?;
    assert!(patch.nickname.is_initialized());
    assert!(!patch.nickname.is_valid());

    apply(&mut user, patch);
    assert_eq!(user.nickname, null());
    assert_eq!(user.age, valid(31));
    Ok(())
}

#[test]
fn struct_wire_form() -> anyhow::Result<()> {
    let mut user = alice();
    user.nickname = null();
    let json = serde_json::to_string(&user)?;
    assert_eq!(json, r#"{"name":"alice","nickname":null,"age":30}"#);

    let back: User = serde_json::from_str(&json)?;
    assert_eq!(back, user);
    assert!(back.nickname.is_initialized());
    Ok(())
}

#[test]
fn bad_field_type_is_reported() {
    let err = serde_json::from_str::<UserPatch>(r#"{"age": "thirty"}"#).unwrap_err();
    assert!(err.is_data());
}

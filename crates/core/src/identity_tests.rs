// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn engine_addr() -> EndpointUri {
    "ipc:///tmp/detectmate.engine.ipc".parse().unwrap()
}

#[test]
fn explicit_id_wins() {
    let explicit = Uuid::new_v4();
    let identity =
        ComponentIdentity::derive("detector", Some(explicit), Some("foo"), &engine_addr(), &[]);
    assert_eq!(identity.id, explicit);
}

#[test]
fn name_derivation_is_deterministic() {
    let a = ComponentIdentity::derive("detector", None, Some("foo"), &engine_addr(), &[]);
    let b = ComponentIdentity::derive("detector", None, Some("foo"), &engine_addr(), &[]);
    assert_eq!(a.id, b.id);
}

#[test]
fn name_derivation_depends_on_type_and_name() {
    let a = ComponentIdentity::derive("detector", None, Some("foo"), &engine_addr(), &[]);
    let b = ComponentIdentity::derive("parser", None, Some("foo"), &engine_addr(), &[]);
    assert_ne!(a.id, b.id);
}

#[test]
fn address_derivation_is_deterministic_and_stable_without_name() {
    let out = vec!["ipc:///tmp/out1".parse().unwrap()];
    let a = ComponentIdentity::derive("detector", None, None, &engine_addr(), &out);
    let b = ComponentIdentity::derive("detector", None, None, &engine_addr(), &out);
    assert_eq!(a.id, b.id);
}

#[test]
fn address_derivation_differs_with_outputs() {
    let a = ComponentIdentity::derive("detector", None, None, &engine_addr(), &[]);
    let out = vec!["ipc:///tmp/out1".parse().unwrap()];
    let b = ComponentIdentity::derive("detector", None, None, &engine_addr(), &out);
    assert_ne!(a.id, b.id);
}

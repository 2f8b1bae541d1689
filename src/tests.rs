use parity_scale_codec::{Compact, Encode};
use primitive_types::H256;

use crate::std::{string::ToString, vec::Vec};

use crate::cards::{show_cards, DecodedField, VariantData};
use crate::compacts::get_compact;
use crate::cursor::ByteCursor;
use crate::error::{ParserError, SignableError};
use crate::schema::{CallTable, PalletCalls, RuntimeVersion, COMPACT_U32};
use crate::special_indicators::{SpecialtyArray, SpecialtyUnsignedInteger, UnsignedWidth};
use crate::{
    calls_v11::CALL_TABLE_V11, calls_v12::CALL_TABLE_V12, decode_transaction,
    decode_transaction_with, parse_transaction, resolve, BuiltinRegistry, DecodeLimits,
    RuntimeVersionMap, ShortSpecs, SpecVersionRange, VersionedCallRef,
};

fn specs() -> ShortSpecs {
    ShortSpecs {
        base58prefix: 42,
        decimals: 12,
        name: "westend".to_string(),
        unit: "WND".to_string(),
    }
}

fn h256(hex_str: &str) -> H256 {
    H256(hex::decode(hex_str).unwrap().try_into().unwrap())
}

fn westend_genesis_hash() -> H256 {
    h256("e143f23803ac50e8f6f8e62695d1ce9e4e1d68aa36c1cd2cfd15340213f3423e")
}

/// Public key of `//Bob`.
const BOB: &str = "8eaf04151687736326c9fea17e25fc5287613693c912909cb226aa4794f26a48";

fn westend_versions() -> RuntimeVersionMap {
    RuntimeVersionMap::new(vec![
        SpecVersionRange {
            from: 0,
            to: 8999,
            version: RuntimeVersion::V11,
        },
        SpecVersionRange {
            from: 9000,
            to: 9999,
            version: RuntimeVersion::V12,
        },
    ])
}

/// `Utility.batch_all` with `Staking.bond` and `Staking.nominate`, Westend 9111.
const TX_BATCH: &str = "10020806000046ebddef8cd9bb167dc30878d7113b7e168e6f0646beffd77d69d39bad76b47a07001b2c3ef70006050c0008264834504a64ace1373f0c8ed5d57381ddf54a2f67a318fa42b1352681606d00aebb0211dbb07b4d335a657257b8ac5e53794c901e4f616d4a254f2490c43934009ae581fef1fc06828723715731adcf810e42ce4dadad629b1b7fa5c3c144a81d550008009723000007000000e143f23803ac50e8f6f8e62695d1ce9e4e1d68aa36c1cd2cfd15340213f3423e5b1d91c89d3de85a4d6eee76ecf3a303cf38b59e7d81522eb7cd24b02eb161ff";

/// `Balances.transfer_keep_alive`, Westend 9111.
const TX_TRANSFER: &str = "0403008eaf04151687736326c9fea17e25fc5287613693c912909cb226aa4794f26a480284d717d5031504025a62029723000007000000e143f23803ac50e8f6f8e62695d1ce9e4e1d68aa36c1cd2cfd15340213f3423e98a8ee9e389043cd8a9954b254d822d34138b9ae97d3b7f50dc6781b13df8d84";

/// Call part of a signable transaction.
fn call_part(tx: &str) -> Vec<u8> {
    let data = hex::decode(tx).unwrap();
    // era is the only variable-size part of extensions in these transactions
    let era_nonce_tip_len = match tx {
        TX_BATCH => 2 + 1 + 1,
        _ => 2 + 2 + 4,
    };
    data[..data.len() - 72 - era_nonce_tip_len].to_vec()
}

fn transfer_v11(value: u32) -> Vec<u8> {
    let mut data = vec![4, 0];
    data.extend(hex::decode(BOB).unwrap());
    data.extend(Compact(value).encode());
    data
}

/// `Multisig.as_multi` with timepoint and nested `Balances.transfer`, `V11`.
fn as_multi_v11() -> Vec<u8> {
    let mut data = vec![23, 1, 2, 0, 4];
    data.extend(hex::decode(BOB).unwrap());
    data.push(1);
    data.extend(9_000_000u32.encode());
    data.extend(2u32.encode());
    data.extend(transfer_v11(1000));
    data
}

/// Nested `Utility.as_derivative` calls around `Timestamp.set`, `V11`.
fn as_derivative_chain(wrappers: usize) -> Vec<u8> {
    let mut data = Vec::new();
    for _ in 0..wrappers {
        data.extend_from_slice(&[16, 1, 0, 0]);
    }
    data.extend_from_slice(&[2, 0, 0]);
    data
}

#[test]
fn tr_1() {
    let data = hex::decode(TX_BATCH).unwrap();
    let parsed = parse_transaction(
        &data,
        &BuiltinRegistry,
        &westend_versions(),
        westend_genesis_hash(),
        DecodeLimits::default(),
    )
    .unwrap();
    assert_eq!(parsed.call.version(), RuntimeVersion::V12);
    let carded = parsed.card(&specs());

    let call_known = r#"Pallet: Utility
  Call: batch_all
    Field Name: calls
      Sequence: 2 element(s)
        Pallet: Staking
          Call: bond
            Field Name: controller
              Enum Variant Name: Id
                Id: 5DfhGyQdFobKM8NsWvEeAKk5EQQgYe9AydgJ7rMB6E1EqRzV
            Field Name: value
              Balance: 1.061900000000 WND
            Field Name: payee
              Enum Variant Name: Staked
        Pallet: Staking
          Call: nominate
            Field Name: targets
              Sequence: 3 element(s)
                Enum Variant Name: Id
                  Id: 5CFPcUJgYgWryPaV1aYjSbTpbTLu42V32Ytw1L9rfoMAsfGh
                Enum Variant Name: Id
                  Id: 5G1ojzh47Yt8KoYhuAjXpHcazvsoCXe3G8LZchKDvumozJJJ
                Enum Variant Name: Id
                  Id: 5FZoQhgUCmqBxnkHX7jCqThScS2xQWiwiF61msg63CFL3Y8f"#;
    assert_eq!(show_cards(&carded.call), call_known);

    let extensions_known = r#"Era: Mortal, phase: 5, period: 64
Nonce: 2
Tip: 0 pWND
Network: westend9111
Tx Version: 7
Block Hash: 5b1d91c89d3de85a4d6eee76ecf3a303cf38b59e7d81522eb7cd24b02eb161ff"#;
    assert_eq!(show_cards(&carded.extensions), extensions_known);
}

#[test]
fn tr_2() {
    let data = hex::decode(TX_TRANSFER).unwrap();
    let parsed = parse_transaction(
        &data,
        &BuiltinRegistry,
        &westend_versions(),
        westend_genesis_hash(),
        DecodeLimits::default(),
    )
    .unwrap();

    let call = match parsed.call.as_versioned() {
        VersionedCallRef::V12(call) => call,
        VersionedCallRef::V11(_) => panic!("Expected V12 call."),
    };
    assert_eq!(call.pallet_name, "Balances");
    assert_eq!(call.call_name, "transfer_keep_alive");
    assert_eq!(
        call.field("value"),
        Some(&DecodedField::Unsigned {
            value: 100_000_000,
            width: UnsignedWidth::U128,
            specialty: SpecialtyUnsignedInteger::Balance,
        })
    );
    match call.field("dest") {
        Some(DecodedField::Variant(VariantData { name, fields, .. })) => {
            assert_eq!(*name, "Id");
            assert_eq!(fields.len(), 1);
        }
        _ => panic!("Expected MultiAddress."),
    }

    let extensions = parsed.extensions;
    assert_eq!(extensions.era, crate::additional_types::Era::Mortal(64, 61));
    assert_eq!(extensions.nonce, 261);
    assert_eq!(extensions.tip, 10_000_000);
    assert_eq!(extensions.spec_version, 9111);
    assert_eq!(extensions.tx_version, 7);
    assert_eq!(
        extensions.block_hash,
        h256("98a8ee9e389043cd8a9954b254d822d34138b9ae97d3b7f50dc6781b13df8d84")
    );

    let carded = parsed.card(&specs());
    assert_eq!(
        show_cards(&carded.call),
        r#"Pallet: Balances
  Call: transfer_keep_alive
    Field Name: dest
      Enum Variant Name: Id
        Id: 5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty
    Field Name: value
      Balance: 0.000100000000 WND"#
    );
    assert_eq!(carded.extensions[2].show(), "Tip: 0.000010000000 WND");
}

#[test]
fn call_part_decodes_alone() {
    let data = call_part(TX_BATCH);
    let decoded = decode_transaction(12, &data).unwrap();
    assert_eq!(decoded.call().call_name, "batch_all");
    match decoded.call().field("calls") {
        Some(DecodedField::Sequence(calls)) => assert_eq!(calls.len(), 2),
        _ => panic!("Expected sequence of calls."),
    }

    // same bytes have different meaning in `V11`
    assert!(decode_transaction(11, &data).is_err());
}

#[test]
fn decoding_is_deterministic() {
    let data = call_part(TX_BATCH);
    let first = decode_transaction(12, &data).unwrap();
    let second = decode_transaction(12, &data).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.card(&specs()), second.card(&specs()));
}

#[test]
fn truncation_at_every_offset() {
    for tx in [TX_BATCH, TX_TRANSFER] {
        let data = call_part(tx);
        for len in 0..data.len() {
            let error = decode_transaction(12, &data[..len]).unwrap_err();
            assert!(
                error.error.is_truncation(),
                "Unexpected error at length {len}: {error}"
            );
        }
        assert!(decode_transaction(12, &data).is_ok());
    }

    // `V11` calls with nesting and options
    for data in [as_derivative_chain(2), as_multi_v11()] {
        for len in 0..data.len() {
            let error = decode_transaction(11, &data[..len]).unwrap_err();
            assert!(
                error.error.is_truncation(),
                "Unexpected error at length {len}: {error}"
            );
        }
        assert!(decode_transaction(11, &data).is_ok());
    }
}

#[test]
fn leftover_call_data() {
    let error = decode_transaction(11, &[2, 0, 0, 0xff]).unwrap_err();
    assert_eq!(error.error, ParserError::SomeDataNotUsed { from: 3 });
    assert!(error.path.is_empty());
}

#[test]
fn table_round_trip() {
    for table in [&CALL_TABLE_V11, &CALL_TABLE_V12] {
        let mut pallet_indices: Vec<u8> = table.pallets.iter().map(|x| x.index).collect();
        pallet_indices.sort_unstable();
        pallet_indices.dedup();
        assert_eq!(pallet_indices.len(), table.pallets.len());

        let mut count = 0;
        for resolved in table.iter() {
            let found = resolve(
                table.version.tag(),
                resolved.call_index.pallet,
                resolved.call_index.method,
            )
            .unwrap();
            assert!(std::ptr::eq(found.schema, resolved.schema));
            assert_eq!(found.pallet_name, resolved.pallet_name);
            assert_eq!(found.version, table.version);
            count += 1;
        }
        assert!(count > 50);
    }
}

#[test]
fn resolve_failures() {
    assert_eq!(
        resolve(99, 0, 0).unwrap_err(),
        ParserError::UnsupportedVersion { tag: 99 }
    );
    assert_eq!(
        resolve(11, 255, 255).unwrap_err(),
        ParserError::UnknownCall {
            version: RuntimeVersion::V11,
            pallet_index: 255,
            method_index: 255
        }
    );
    // method index out of pallet calls range
    assert!(matches!(
        resolve(11, 4, 4),
        Err(ParserError::UnknownCall { .. })
    ));
    assert_eq!(resolve(12, 4, 4).unwrap().schema.name, "transfer_all");
}

#[test]
fn versions_differ() {
    let v11 = resolve(11, 23, 1).unwrap();
    let v12 = resolve(12, 23, 1).unwrap();
    assert_eq!(v11.schema.name, "as_multi");
    assert_eq!(v12.schema.name, "as_multi");
    assert_ne!(v11.schema.fields.len(), v12.schema.fields.len());
}

#[test]
fn compact_round_trip() {
    let values: [u128; 8] = [
        0,
        63,
        64,
        16383,
        16384,
        1 << 30,
        u32::MAX as u128,
        u128::MAX / 3,
    ];
    for value in values {
        let encoded = Compact(value).encode();
        let mut cursor = ByteCursor::new(&encoded);
        assert_eq!(get_compact::<u128>(&mut cursor).unwrap(), value);
        assert!(cursor.is_empty());
    }
}

#[test]
fn invalid_enum_discriminant() {
    // `Proxy.add_proxy` with proxy type `0xff`
    let mut data = vec![22, 1];
    data.extend_from_slice(&[0; 32]);
    data.push(0xff);
    let error = decode_transaction(11, &data).unwrap_err();
    assert_eq!(
        error.error,
        ParserError::InvalidEnumDiscriminant {
            position: 34,
            discriminant: 0xff,
            ty: "enum"
        }
    );
    assert_eq!(error.path.to_string(), "Proxy.add_proxy >> proxy_type");
}

#[test]
fn invalid_bool() {
    // `Indices.force_transfer` with `freeze` set to `2`
    let mut data = vec![3, 3];
    data.extend_from_slice(&[0; 32]);
    data.extend_from_slice(&[1, 0, 0, 0]);
    data.push(2);
    let error = decode_transaction(11, &data).unwrap_err();
    assert_eq!(
        error.error,
        ParserError::InvalidEnumDiscriminant {
            position: 38,
            discriminant: 2,
            ty: "bool"
        }
    );
}

#[test]
fn nested_call_depth() {
    assert!(decode_transaction(11, &as_derivative_chain(4)).is_ok());

    let error = decode_transaction(11, &as_derivative_chain(5)).unwrap_err();
    assert_eq!(
        error.error,
        ParserError::RecursionLimitExceeded { limit: 4 }
    );

    let shallow = DecodeLimits { max_call_depth: 1 };
    assert!(decode_transaction_with(&BuiltinRegistry, shallow, 11, &as_derivative_chain(1)).is_ok());
    let error =
        decode_transaction_with(&BuiltinRegistry, shallow, 11, &as_derivative_chain(2)).unwrap_err();
    assert_eq!(
        error.error,
        ParserError::RecursionLimitExceeded { limit: 1 }
    );
    assert_eq!(
        error.path.to_string(),
        "Utility.as_derivative >> call >> Utility.as_derivative >> call"
    );
}

#[test]
fn error_path_in_batch() {
    // `Utility.batch` with `System.remark` and a cut `Balances.transfer`
    let mut data = vec![16, 0, 8, 0, 1, 0];
    data.extend_from_slice(&[4, 0, 0]);
    data.extend_from_slice(&[0; 32]);
    data.push(0b10);
    let error = decode_transaction(12, &data).unwrap_err();
    assert_eq!(
        error.error,
        ParserError::TruncatedInput {
            position: 41,
            minimal_length: 4,
            ty: "compact"
        }
    );
    assert_eq!(
        error.path.to_string(),
        "Utility.batch >> calls >> [1] >> Balances.transfer >> value"
    );
}

#[test]
fn sequence_length_checked_first() {
    // `System.kill_storage` announcing 2^30 - 1 keys with no data
    let data = [0, 7, 0xfe, 0xff, 0xff, 0xff];
    let error = decode_transaction(12, &data).unwrap_err();
    assert_eq!(
        error.error,
        ParserError::TruncatedInput {
            position: 6,
            minimal_length: (1 << 30) - 1,
            ty: "sequence"
        }
    );
}

static TEST_TABLE: CallTable = CallTable {
    version: RuntimeVersion::V11,
    pallets: &[PalletCalls {
        index: 5,
        name: "TestPallet",
        calls: &[call!("test_call", "amount" => COMPACT_U32)],
    }],
};

#[test]
fn custom_table() {
    let registry: &[&'static CallTable] = &[&TEST_TABLE];

    let decoded = decode_transaction_with(registry, DecodeLimits::default(), 11, &[5, 0, 0]).unwrap();
    assert_eq!(decoded.call().pallet_name, "TestPallet");
    assert_eq!(
        decoded.call().field("amount"),
        Some(&DecodedField::Unsigned {
            value: 0,
            width: UnsignedWidth::U32,
            specialty: SpecialtyUnsignedInteger::None,
        })
    );

    // compact claims 4 bytes, only 1 present
    let error = decode_transaction_with(registry, DecodeLimits::default(), 11, &[5, 0, 2]).unwrap_err();
    assert!(matches!(error.error, ParserError::TruncatedInput { .. }));

    // built-in calls are not known to custom registry
    assert!(matches!(
        decode_transaction_with(registry, DecodeLimits::default(), 11, &transfer_v11(1)),
        Err(e) if matches!(e.error, ParserError::UnknownCall { .. })
    ));

    // no table for `V12`
    assert_eq!(
        decode_transaction_with(registry, DecodeLimits::default(), 12, &[5, 0, 0])
            .unwrap_err()
            .error,
        ParserError::UnsupportedVersion { tag: 12 }
    );
}

#[test]
fn primitive_cards() {
    // `Staking.validate` with 10% commission, not blocked
    let mut data = vec![6, 4];
    data.extend(Compact(100_000_000u32).encode());
    data.push(0);
    let decoded = decode_transaction(12, &data).unwrap();
    assert_eq!(
        show_cards(&decoded.card(&specs())),
        r#"Pallet: Staking
  Call: validate
    Field Name: prefs
      Field Name: commission
        Perbill: 10.0000000%
      Field Name: blocked
        Bool: false"#
    );

    // `Staking.scale_validator_count` by 50%
    let decoded = decode_transaction(12, &[6, 11, 50]).unwrap();
    assert_eq!(decoded.card(&specs())[3].show(), "      Percent: 50%");

    // `System.remark` with text
    let mut data = vec![0, 1];
    data.extend(b"hello".to_vec().encode());
    let decoded = decode_transaction(12, &data).unwrap();
    assert_eq!(
        decoded.card(&specs())[3].show(),
        "      Bytes: 68656c6c6f (hello)"
    );

    // `System.set_changes_trie_config` with no config
    let decoded = decode_transaction(11, &[0, 5, 0]).unwrap();
    assert_eq!(decoded.card(&specs())[3].show(), "      Option: None");

    // `Balances.transfer` in `V11`, plain account id and balance
    let data = transfer_v11(1000);
    let decoded = decode_transaction(11, &data).unwrap();
    let cards = decoded.card(&specs());
    assert_eq!(
        cards[3].show(),
        "      Id: 5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty"
    );
    assert_eq!(cards[5].show(), "      Balance: 0.000000001000 WND");
}

fn immortal_timestamp_tx(block_hash: H256) -> Vec<u8> {
    // `Timestamp.set`, immortal, nonce 0, tip 0
    let mut data = vec![2, 0, 0, 0, 0, 0];
    data.extend(9111u32.encode());
    data.extend(7u32.encode());
    data.extend_from_slice(westend_genesis_hash().as_bytes());
    data.extend_from_slice(block_hash.as_bytes());
    data
}

#[test]
fn immortal_transaction() {
    let data = immortal_timestamp_tx(westend_genesis_hash());
    let parsed = parse_transaction(
        &data,
        &BuiltinRegistry,
        &westend_versions(),
        westend_genesis_hash(),
        DecodeLimits::default(),
    )
    .unwrap();
    assert_eq!(parsed.card(&specs()).extensions[0].show(), "Era: Immortal");

    let data = immortal_timestamp_tx(H256::repeat_byte(1));
    assert_eq!(
        parse_transaction(
            &data,
            &BuiltinRegistry,
            &westend_versions(),
            westend_genesis_hash(),
            DecodeLimits::default(),
        )
        .unwrap_err(),
        SignableError::ImmortalHashMismatch
    );
}

#[test]
fn wrong_genesis_hash() {
    let data = hex::decode(TX_TRANSFER).unwrap();
    let expected = H256::repeat_byte(7);
    assert_eq!(
        parse_transaction(
            &data,
            &BuiltinRegistry,
            &westend_versions(),
            expected,
            DecodeLimits::default(),
        )
        .unwrap_err(),
        SignableError::WrongGenesisHash {
            as_decoded: westend_genesis_hash(),
            expected
        }
    );
}

#[test]
fn unmapped_spec_version() {
    let data = hex::decode(TX_TRANSFER).unwrap();
    let versions = RuntimeVersionMap::new(vec![SpecVersionRange {
        from: 0,
        to: 9110,
        version: RuntimeVersion::V11,
    }]);
    assert_eq!(
        parse_transaction(
            &data,
            &BuiltinRegistry,
            &versions,
            westend_genesis_hash(),
            DecodeLimits::default(),
        )
        .unwrap_err(),
        SignableError::UnsupportedSpecVersion(9111)
    );
}

#[test]
fn extensions_data_not_used() {
    let mut data = hex::decode(TX_TRANSFER).unwrap();
    data.push(0);
    let any_version = RuntimeVersionMap::new(vec![SpecVersionRange {
        from: 0,
        to: u32::MAX,
        version: RuntimeVersion::V12,
    }]);
    let len = data.len();
    assert_eq!(
        parse_transaction(
            &data,
            &BuiltinRegistry,
            &any_version,
            westend_genesis_hash(),
            DecodeLimits::default(),
        )
        .unwrap_err(),
        SignableError::SomeDataNotUsedExtensions { from: len - 1 }
    );
}

#[test]
fn cut_signable() {
    let data = [4, 3, 0];
    assert_eq!(
        parse_transaction(
            &data,
            &BuiltinRegistry,
            &westend_versions(),
            westend_genesis_hash(),
            DecodeLimits::default(),
        )
        .unwrap_err(),
        SignableError::CutSignable
    );
}

#[test]
fn error_display() {
    let error = decode_transaction(11, &as_derivative_chain(5)).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Nested calls exceed the maximum allowed depth 4. Field path: Utility.as_derivative >> call >> Utility.as_derivative >> call >> Utility.as_derivative >> call >> Utility.as_derivative >> call >> Utility.as_derivative >> call."
    );
}

#[test]
fn commission_out_of_range() {
    // `Staking.validate` with commission over 100%
    let mut data = vec![6, 4];
    data.extend(Compact(1_000_000_001u32).encode());
    data.push(0);
    let error = decode_transaction(12, &data).unwrap_err();
    assert_eq!(
        error.error,
        ParserError::TypeFailure {
            position: 2,
            ty: "Perbill"
        }
    );
    assert_eq!(error.path.to_string(), "Staking.validate >> prefs >> commission");

    // `Staking.scale_validator_count` by 101%
    let error = decode_transaction(11, &[6, 11, 101]).unwrap_err();
    assert_eq!(
        error.error,
        ParserError::TypeFailure {
            position: 2,
            ty: "Percent"
        }
    );
}

#[test]
fn identity_set_identity() {
    // display name is raw data of 5 bytes, everything else is empty
    let mut data = vec![17, 1, 0, 6];
    data.extend_from_slice(b"Alice");
    data.extend_from_slice(&[0; 7]);
    for version in [11, 12] {
        let decoded = decode_transaction(version, &data).unwrap();
        assert_eq!(decoded.call().pallet_name, "Identity");
        assert_eq!(decoded.call().call_name, "set_identity");
        let info = match decoded.call().field("info") {
            Some(DecodedField::Composite(info)) => info,
            _ => panic!("Expected identity info."),
        };
        assert_eq!(info.len(), 9);
        assert_eq!(info[1].name, "display");
        match &info[1].data {
            DecodedField::Variant(VariantData {
                index: 6,
                name: "Raw5",
                fields,
            }) => assert_eq!(
                fields[0].data,
                DecodedField::Array {
                    bytes: b"Alice",
                    specialty: SpecialtyArray::None
                }
            ),
            _ => panic!("Expected raw display name."),
        }
        assert_eq!(info[6].data, DecodedField::Option(None));
    }

    // raw data length is declared by discriminant
    let error = decode_transaction(12, &data[..8]).unwrap_err();
    assert!(error.error.is_truncation());
    assert_eq!(
        error.path.to_string(),
        "Identity.set_identity >> info >> display >> Raw5 >> [0]"
    );
}

#[test]
fn scheduled_sudo_call() {
    // `Scheduler.schedule` every 100 blocks 3 times, calling `Sudo.sudo`
    // with `Balances.transfer_keep_alive`
    let mut data = vec![20, 0];
    data.extend(9_000_000u32.encode());
    data.push(1);
    data.extend(100u32.encode());
    data.extend(3u32.encode());
    data.push(0);
    data.extend_from_slice(&[21, 0, 4, 3, 0]);
    data.extend(hex::decode(BOB).unwrap());
    data.extend(Compact(1000u128).encode());

    let decoded = decode_transaction(12, &data).unwrap();
    let sudo = match decoded.call().field("call") {
        Some(DecodedField::Call(call)) => call,
        _ => panic!("Expected nested call."),
    };
    assert_eq!(sudo.pallet_name, "Sudo");
    match sudo.field("call") {
        Some(DecodedField::Call(call)) => assert_eq!(call.call_name, "transfer_keep_alive"),
        _ => panic!("Expected nested call."),
    }

    let cards = decoded.card(&specs());
    assert_eq!(cards[4].show(), "    Field Name: maybe_periodic");
    assert_eq!(cards[5].show(), "      Field Number: 0");
    assert_eq!(cards[6].show(), "        u32: 100");

    // `V11` has no `schedule_after`
    assert!(resolve(11, 20, 4).is_err());
    assert_eq!(resolve(12, 20, 4).unwrap().schema.name, "schedule_after");
}

#[test]
fn consensus_pallets_in_v12_only() {
    // `Grandpa.note_stalled`
    let mut data = vec![10, 2];
    data.extend(1000u32.encode());
    data.extend(2000u32.encode());
    assert!(decode_transaction(12, &data).is_ok());
    assert!(matches!(
        decode_transaction(11, &data).unwrap_err().error,
        ParserError::UnknownCall { .. }
    ));

    // `Babe.plan_config_change` to primary and secondary plain slots
    let mut data = vec![1, 2, 1];
    data.extend(1u64.encode());
    data.extend(4u64.encode());
    data.push(1);
    let decoded = decode_transaction(12, &data).unwrap();
    assert_eq!(decoded.call().call_name, "plan_config_change");

    // election pallet is not in the table
    assert_eq!(
        resolve(12, 24, 0).unwrap_err(),
        ParserError::UnknownCall {
            version: RuntimeVersion::V12,
            pallet_index: 24,
            method_index: 0
        }
    );
}

#[test]
fn hash_cards() {
    // `Proxy.announce` for Bob with call hash
    let mut data = vec![22, 6];
    data.extend(hex::decode(BOB).unwrap());
    data.extend_from_slice(&[0xab; 32]);
    let decoded = decode_transaction(12, &data).unwrap();
    let cards = decoded.card(&specs());
    assert_eq!(
        cards[3].show(),
        "      Id: 5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty"
    );
    assert_eq!(
        cards[5].show(),
        format!("      Hash: {}", hex::encode([0xab; 32]))
    );

    // session keys have no specialty
    let mut data = vec![8, 0];
    data.extend_from_slice(&[0x01; 32 * 6]);
    data.push(0);
    let decoded = decode_transaction(12, &data).unwrap();
    assert_eq!(
        decoded.card(&specs())[4].show(),
        format!("        Array: {}", hex::encode([0x01; 32]))
    );
}

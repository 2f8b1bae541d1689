//! Call table for runtime version `V12`.
//!
//! Compared to `V11`, addresses are `MultiAddress` enums, proxies carry
//! announcement delay, multisig `as_multi` receives the nested call as an
//! opaque byte vector with weight limit, and several calls were added.
//! Consensus pallets (`Babe`, `Authorship`, `Grandpa`, `ImOnline`) appear in
//! this version only.
//!
//! Pallet set is a reduced Westend runtime: layouts follow Westend 9111 for
//! the pallets present here, while election solutions and parachain pallets
//! are not included, their calls are unknown to this table.
use crate::schema::{
    CallTable, FieldSchema, PalletCalls, RuntimeVersion, ACCOUNT_ID, BALANCE, BALANCE_PLAIN,
    BLOCK_NUMBER, BOOL, BYTES, CALL, CHANGES_TRIE_CONFIGURATION, COMPACT_U32, COMPACT_U64, HASH,
    IDENTITY_DATA, IDENTITY_INFO, JUDGEMENT, KEY, KEY_VALUE, PERBILL, PERBILL_COMPACT, PERCENT,
    PERIOD, SIGNATURE, SUB_ACCOUNT, TIMEPOINT, U16, U32, U64, U8, VESTING_INFO, WEIGHT,
};
use crate::special_indicators::SpecialtyArray;

const ADDRESS_32: FieldSchema = FieldSchema::Array {
    len: 32,
    specialty: SpecialtyArray::None,
};

const ADDRESS_20: FieldSchema = FieldSchema::Array {
    len: 20,
    specialty: SpecialtyArray::None,
};

/// `MultiAddress<AccountId, AccountIndex>`.
pub const LOOKUP_SOURCE: FieldSchema = variants![
    0 "Id" ("" => ACCOUNT_ID),
    1 "Index" ("" => COMPACT_U32),
    2 "Raw" ("" => BYTES),
    3 "Address32" ("" => ADDRESS_32),
    4 "Address20" ("" => ADDRESS_20)
];

pub const REWARD_DESTINATION: FieldSchema = variants![
    0 "Staked" (),
    1 "Stash" (),
    2 "Controller" (),
    3 "Account" ("" => ACCOUNT_ID),
    4 "None" ()
];

pub const PROXY_TYPE: FieldSchema = variants![
    0 "Any" (),
    1 "NonTransfer" (),
    2 "Staking" (),
    3 "SudoBalances" (),
    4 "IdentityJudgement" (),
    5 "CancelProxy" ()
];

pub const VALIDATOR_PREFS: FieldSchema =
    composite!("commission" => PERBILL_COMPACT, "blocked" => BOOL);

pub const SESSION_KEYS: FieldSchema = composite!(
    "grandpa" => KEY,
    "babe" => KEY,
    "im_online" => KEY,
    "para_validator" => KEY,
    "para_assignment" => KEY,
    "authority_discovery" => KEY
);

/// Engine id of a consensus digest item.
const ENGINE_ID: FieldSchema = FieldSchema::Array {
    len: 4,
    specialty: SpecialtyArray::None,
};

const CHANGES_TRIE_SIGNAL: FieldSchema = variants![
    0 "NewConfiguration" ("" => FieldSchema::Option(&CHANGES_TRIE_CONFIGURATION))
];

pub const DIGEST_ITEM: FieldSchema = variants![
    0 "Other" ("" => BYTES),
    2 "ChangesTrieRoot" ("" => HASH),
    4 "Consensus" ("" => ENGINE_ID, "" => BYTES),
    5 "Seal" ("" => ENGINE_ID, "" => BYTES),
    6 "PreRuntime" ("" => ENGINE_ID, "" => BYTES),
    7 "ChangesTrieSignal" ("" => CHANGES_TRIE_SIGNAL)
];

/// Block header, block number is compact.
pub const HEADER: FieldSchema = composite!(
    "parent_hash" => HASH,
    "number" => COMPACT_U32,
    "state_root" => HASH,
    "extrinsics_root" => HASH,
    "digest" => composite!("logs" => FieldSchema::Sequence(&DIGEST_ITEM))
);

/// Proof of key ownership in a historical session.
pub const MEMBERSHIP_PROOF: FieldSchema = composite!(
    "session" => U32,
    "trie_nodes" => FieldSchema::Sequence(&BYTES),
    "validator_count" => U32
);

const BABE_EQUIVOCATION_PROOF: FieldSchema = composite!(
    "offender" => KEY,
    "slot" => U64,
    "first_header" => HEADER,
    "second_header" => HEADER
);

const NEXT_CONFIG_DESCRIPTOR: FieldSchema = variants![
    1 "V1" (
        "c" => composite!("" => U64, "" => U64),
        "allowed_slots" => variants![
            0 "PrimarySlots" (),
            1 "PrimaryAndSecondaryPlainSlots" (),
            2 "PrimaryAndSecondaryVRFSlots" ()
        ]
    )
];

/// Grandpa vote target.
const VOTE: FieldSchema = composite!("target_hash" => HASH, "target_number" => BLOCK_NUMBER);

const GRANDPA_EQUIVOCATION: FieldSchema = composite!(
    "round_number" => U64,
    "identity" => KEY,
    "first" => composite!("" => VOTE, "" => SIGNATURE),
    "second" => composite!("" => VOTE, "" => SIGNATURE)
);

const GRANDPA_EQUIVOCATION_PROOF: FieldSchema = composite!(
    "set_id" => U64,
    "equivocation" => variants![
        0 "Prevote" ("" => GRANDPA_EQUIVOCATION),
        1 "Precommit" ("" => GRANDPA_EQUIVOCATION)
    ]
);

const HEARTBEAT: FieldSchema = composite!(
    "block_number" => BLOCK_NUMBER,
    "network_state" => composite!(
        "peer_id" => BYTES,
        "external_addresses" => FieldSchema::Sequence(&BYTES)
    ),
    "session_index" => U32,
    "authority_index" => U32,
    "validators_len" => U32
);

const SYSTEM: PalletCalls = PalletCalls {
    index: 0,
    name: "System",
    calls: &[
        call!("fill_block", "_ratio" => PERBILL),
        call!("remark", "_remark" => BYTES),
        call!("set_heap_pages", "pages" => U64),
        call!("set_code", "code" => BYTES),
        call!("set_code_without_checks", "code" => BYTES),
        call!("set_changes_trie_config", "changes_trie_config" => FieldSchema::Option(&CHANGES_TRIE_CONFIGURATION)),
        call!("set_storage", "items" => FieldSchema::Sequence(&KEY_VALUE)),
        call!("kill_storage", "keys" => FieldSchema::Sequence(&BYTES)),
        call!("kill_prefix", "prefix" => BYTES, "_subkeys" => U32),
        call!("remark_with_event", "remark" => BYTES),
    ],
};

const BABE: PalletCalls = PalletCalls {
    index: 1,
    name: "Babe",
    calls: &[
        call!("report_equivocation", "equivocation_proof" => BABE_EQUIVOCATION_PROOF, "key_owner_proof" => MEMBERSHIP_PROOF),
        call!("report_equivocation_unsigned", "equivocation_proof" => BABE_EQUIVOCATION_PROOF, "key_owner_proof" => MEMBERSHIP_PROOF),
        call!("plan_config_change", "config" => NEXT_CONFIG_DESCRIPTOR),
    ],
};

const TIMESTAMP: PalletCalls = PalletCalls {
    index: 2,
    name: "Timestamp",
    calls: &[call!("set", "now" => COMPACT_U64)],
};

const INDICES: PalletCalls = PalletCalls {
    index: 3,
    name: "Indices",
    calls: &[
        call!("claim", "index" => U32),
        call!("transfer", "new" => ACCOUNT_ID, "index" => U32),
        call!("free", "index" => U32),
        call!("force_transfer", "new" => ACCOUNT_ID, "index" => U32, "freeze" => BOOL),
        call!("freeze", "index" => U32),
    ],
};

const BALANCES: PalletCalls = PalletCalls {
    index: 4,
    name: "Balances",
    calls: &[
        call!("transfer", "dest" => LOOKUP_SOURCE, "value" => BALANCE),
        call!("set_balance", "who" => LOOKUP_SOURCE, "new_free" => BALANCE, "new_reserved" => BALANCE),
        call!("force_transfer", "source" => LOOKUP_SOURCE, "dest" => LOOKUP_SOURCE, "value" => BALANCE),
        call!("transfer_keep_alive", "dest" => LOOKUP_SOURCE, "value" => BALANCE),
        call!("transfer_all", "dest" => LOOKUP_SOURCE, "keep_alive" => BOOL),
    ],
};

const AUTHORSHIP: PalletCalls = PalletCalls {
    index: 5,
    name: "Authorship",
    calls: &[call!("set_uncles", "new_uncles" => FieldSchema::Sequence(&HEADER))],
};

const STAKING: PalletCalls = PalletCalls {
    index: 6,
    name: "Staking",
    calls: &[
        call!("bond", "controller" => LOOKUP_SOURCE, "value" => BALANCE, "payee" => REWARD_DESTINATION),
        call!("bond_extra", "max_additional" => BALANCE),
        call!("unbond", "value" => BALANCE),
        call!("withdraw_unbonded", "num_slashing_spans" => U32),
        call!("validate", "prefs" => VALIDATOR_PREFS),
        call!("nominate", "targets" => FieldSchema::Sequence(&LOOKUP_SOURCE)),
        call!("chill"),
        call!("set_payee", "payee" => REWARD_DESTINATION),
        call!("set_controller", "controller" => LOOKUP_SOURCE),
        call!("set_validator_count", "new" => COMPACT_U32),
        call!("increase_validator_count", "additional" => COMPACT_U32),
        call!("scale_validator_count", "factor" => PERCENT),
        call!("force_no_eras"),
        call!("force_new_era"),
        call!("set_invulnerables", "invulnerables" => FieldSchema::Sequence(&ACCOUNT_ID)),
        call!("force_unstake", "stash" => ACCOUNT_ID, "num_slashing_spans" => U32),
        call!("force_new_era_always"),
        call!("cancel_deferred_slash", "era" => U32, "slash_indices" => FieldSchema::Sequence(&U32)),
        call!("payout_stakers", "validator_stash" => ACCOUNT_ID, "era" => U32),
        call!("rebond", "value" => BALANCE),
        call!("set_history_depth", "new_history_depth" => COMPACT_U32, "era_items_deleted" => COMPACT_U32),
        call!("reap_stash", "stash" => ACCOUNT_ID, "num_slashing_spans" => U32),
        call!("kick", "who" => FieldSchema::Sequence(&LOOKUP_SOURCE)),
        call!(
            "set_staking_limits",
            "min_nominator_bond" => BALANCE_PLAIN,
            "min_validator_bond" => BALANCE_PLAIN,
            "max_nominator_count" => FieldSchema::Option(&U32),
            "max_validator_count" => FieldSchema::Option(&U32),
            "threshold" => FieldSchema::Option(&PERCENT)
        ),
        call!("chill_other", "controller" => ACCOUNT_ID),
    ],
};

const SESSION: PalletCalls = PalletCalls {
    index: 8,
    name: "Session",
    calls: &[
        call!("set_keys", "keys" => SESSION_KEYS, "proof" => BYTES),
        call!("purge_keys"),
    ],
};

const GRANDPA: PalletCalls = PalletCalls {
    index: 10,
    name: "Grandpa",
    calls: &[
        call!("report_equivocation", "equivocation_proof" => GRANDPA_EQUIVOCATION_PROOF, "key_owner_proof" => MEMBERSHIP_PROOF),
        call!("report_equivocation_unsigned", "equivocation_proof" => GRANDPA_EQUIVOCATION_PROOF, "key_owner_proof" => MEMBERSHIP_PROOF),
        call!("note_stalled", "delay" => BLOCK_NUMBER, "best_finalized_block_number" => BLOCK_NUMBER),
    ],
};

const IM_ONLINE: PalletCalls = PalletCalls {
    index: 11,
    name: "ImOnline",
    calls: &[call!("heartbeat", "heartbeat" => HEARTBEAT, "_signature" => SIGNATURE)],
};

const UTILITY: PalletCalls = PalletCalls {
    index: 16,
    name: "Utility",
    calls: &[
        call!("batch", "calls" => FieldSchema::Sequence(&CALL)),
        call!("as_derivative", "index" => U16, "call" => CALL),
        call!("batch_all", "calls" => FieldSchema::Sequence(&CALL)),
    ],
};

const IDENTITY: PalletCalls = PalletCalls {
    index: 17,
    name: "Identity",
    calls: &[
        call!("add_registrar", "account" => ACCOUNT_ID),
        call!("set_identity", "info" => IDENTITY_INFO),
        call!("set_subs", "subs" => FieldSchema::Sequence(&SUB_ACCOUNT)),
        call!("clear_identity"),
        call!("request_judgement", "reg_index" => COMPACT_U32, "max_fee" => BALANCE),
        call!("cancel_request", "reg_index" => U32),
        call!("set_fee", "index" => COMPACT_U32, "fee" => BALANCE),
        call!("set_account_id", "index" => COMPACT_U32, "new" => ACCOUNT_ID),
        call!("set_fields", "index" => COMPACT_U32, "fields" => U64),
        call!("provide_judgement", "reg_index" => COMPACT_U32, "target" => LOOKUP_SOURCE, "judgement" => JUDGEMENT),
        call!("kill_identity", "target" => LOOKUP_SOURCE),
        call!("add_sub", "sub" => LOOKUP_SOURCE, "data" => IDENTITY_DATA),
        call!("rename_sub", "sub" => LOOKUP_SOURCE, "data" => IDENTITY_DATA),
        call!("remove_sub", "sub" => LOOKUP_SOURCE),
        call!("quit_sub"),
    ],
};

const RECOVERY: PalletCalls = PalletCalls {
    index: 18,
    name: "Recovery",
    calls: &[
        call!("as_recovered", "account" => ACCOUNT_ID, "call" => CALL),
        call!("set_recovered", "lost" => ACCOUNT_ID, "rescuer" => ACCOUNT_ID),
        call!("create_recovery", "friends" => FieldSchema::Sequence(&ACCOUNT_ID), "threshold" => U16, "delay_period" => BLOCK_NUMBER),
        call!("initiate_recovery", "account" => ACCOUNT_ID),
        call!("vouch_recovery", "lost" => ACCOUNT_ID, "rescuer" => ACCOUNT_ID),
        call!("claim_recovery", "account" => ACCOUNT_ID),
        call!("close_recovery", "rescuer" => ACCOUNT_ID),
        call!("remove_recovery"),
        call!("cancel_recovered", "account" => ACCOUNT_ID),
    ],
};

const VESTING: PalletCalls = PalletCalls {
    index: 19,
    name: "Vesting",
    calls: &[
        call!("vest"),
        call!("vest_other", "target" => LOOKUP_SOURCE),
        call!("vested_transfer", "target" => LOOKUP_SOURCE, "schedule" => VESTING_INFO),
        call!("force_vested_transfer", "source" => LOOKUP_SOURCE, "target" => LOOKUP_SOURCE, "schedule" => VESTING_INFO),
    ],
};

const SCHEDULER: PalletCalls = PalletCalls {
    index: 20,
    name: "Scheduler",
    calls: &[
        call!("schedule", "when" => BLOCK_NUMBER, "maybe_periodic" => PERIOD, "priority" => U8, "call" => CALL),
        call!("cancel", "when" => BLOCK_NUMBER, "index" => U32),
        call!("schedule_named", "id" => BYTES, "when" => BLOCK_NUMBER, "maybe_periodic" => PERIOD, "priority" => U8, "call" => CALL),
        call!("cancel_named", "id" => BYTES),
        call!("schedule_after", "after" => BLOCK_NUMBER, "maybe_periodic" => PERIOD, "priority" => U8, "call" => CALL),
        call!(
            "schedule_named_after",
            "id" => BYTES,
            "after" => BLOCK_NUMBER,
            "maybe_periodic" => PERIOD,
            "priority" => U8,
            "call" => CALL
        ),
    ],
};

const SUDO: PalletCalls = PalletCalls {
    index: 21,
    name: "Sudo",
    calls: &[
        call!("sudo", "call" => CALL),
        call!("sudo_unchecked_weight", "call" => CALL, "_weight" => WEIGHT),
        call!("set_key", "new" => LOOKUP_SOURCE),
        call!("sudo_as", "who" => LOOKUP_SOURCE, "call" => CALL),
    ],
};

const PROXY: PalletCalls = PalletCalls {
    index: 22,
    name: "Proxy",
    calls: &[
        call!("proxy", "real" => ACCOUNT_ID, "force_proxy_type" => FieldSchema::Option(&PROXY_TYPE), "call" => CALL),
        call!("add_proxy", "delegate" => ACCOUNT_ID, "proxy_type" => PROXY_TYPE, "delay" => BLOCK_NUMBER),
        call!("remove_proxy", "delegate" => ACCOUNT_ID, "proxy_type" => PROXY_TYPE, "delay" => BLOCK_NUMBER),
        call!("remove_proxies"),
        call!("anonymous", "proxy_type" => PROXY_TYPE, "delay" => BLOCK_NUMBER, "index" => U16),
        call!(
            "kill_anonymous",
            "spawner" => ACCOUNT_ID,
            "proxy_type" => PROXY_TYPE,
            "index" => U16,
            "height" => COMPACT_U32,
            "ext_index" => COMPACT_U32
        ),
        call!("announce", "real" => ACCOUNT_ID, "call_hash" => HASH),
        call!("remove_announcement", "real" => ACCOUNT_ID, "call_hash" => HASH),
        call!("reject_announcement", "delegate" => ACCOUNT_ID, "call_hash" => HASH),
        call!(
            "proxy_announced",
            "delegate" => ACCOUNT_ID,
            "real" => ACCOUNT_ID,
            "force_proxy_type" => FieldSchema::Option(&PROXY_TYPE),
            "call" => CALL
        ),
    ],
};

const MULTISIG: PalletCalls = PalletCalls {
    index: 23,
    name: "Multisig",
    calls: &[
        call!("as_multi_threshold_1", "other_signatories" => FieldSchema::Sequence(&ACCOUNT_ID), "call" => CALL),
        call!(
            "as_multi",
            "threshold" => U16,
            "other_signatories" => FieldSchema::Sequence(&ACCOUNT_ID),
            "maybe_timepoint" => FieldSchema::Option(&TIMEPOINT),
            "call" => BYTES,
            "store_call" => BOOL,
            "max_weight" => WEIGHT
        ),
        call!(
            "approve_as_multi",
            "threshold" => U16,
            "other_signatories" => FieldSchema::Sequence(&ACCOUNT_ID),
            "maybe_timepoint" => FieldSchema::Option(&TIMEPOINT),
            "call_hash" => HASH,
            "max_weight" => WEIGHT
        ),
        call!(
            "cancel_as_multi",
            "threshold" => U16,
            "other_signatories" => FieldSchema::Sequence(&ACCOUNT_ID),
            "timepoint" => TIMEPOINT,
            "call_hash" => HASH
        ),
    ],
};

/// Call table for `V12`.
pub static CALL_TABLE_V12: CallTable = CallTable {
    version: RuntimeVersion::V12,
    pallets: &[
        SYSTEM, BABE, TIMESTAMP, INDICES, BALANCES, AUTHORSHIP, STAKING, SESSION, GRANDPA, IM_ONLINE,
        UTILITY, IDENTITY, RECOVERY, VESTING, SCHEDULER, SUDO, PROXY, MULTISIG,
    ],
};

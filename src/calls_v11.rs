//! Call table for runtime version `V11`.
//!
//! Addresses are plain 32-byte account ids, multisig calls carry the nested
//! call itself, proxies are added without delay.
//!
//! Pallet set is a reduced Westend-like runtime. Consensus, election and
//! parachain pallets are not included, their calls are unknown to this
//! table.
use crate::schema::{
    CallTable, FieldSchema, PalletCalls, RuntimeVersion, ACCOUNT_ID, BALANCE, BLOCK_NUMBER, BOOL,
    BYTES, CALL, CHANGES_TRIE_CONFIGURATION, COMPACT_U32, COMPACT_U64, HASH, IDENTITY_DATA,
    IDENTITY_INFO, JUDGEMENT, KEY, KEY_VALUE, PERBILL, PERBILL_COMPACT, PERCENT, PERIOD, SUB_ACCOUNT,
    TIMEPOINT, U16, U32, U64, U8, VESTING_INFO, WEIGHT,
};

/// `<T::Lookup as StaticLookup>::Source`.
pub const LOOKUP_SOURCE: FieldSchema = ACCOUNT_ID;

pub const REWARD_DESTINATION: FieldSchema = variants![
    0 "Staked" (),
    1 "Stash" (),
    2 "Controller" ()
];

pub const PROXY_TYPE: FieldSchema = variants![
    0 "Any" (),
    1 "NonTransfer" (),
    2 "Governance" (),
    3 "Staking" ()
];

pub const VALIDATOR_PREFS: FieldSchema = composite!("commission" => PERBILL_COMPACT);

pub const SESSION_KEYS: FieldSchema = composite!(
    "grandpa" => KEY,
    "babe" => KEY,
    "im_online" => KEY,
    "parachain_validator" => KEY,
    "authority_discovery" => KEY
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
        call!("kill_prefix", "prefix" => BYTES),
        call!("suicide"),
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
    ],
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
        call!("set_history_depth", "new_history_depth" => COMPACT_U32, "_era_items_deleted" => COMPACT_U32),
        call!("reap_stash", "stash" => ACCOUNT_ID, "num_slashing_spans" => U32),
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

const UTILITY: PalletCalls = PalletCalls {
    index: 16,
    name: "Utility",
    calls: &[
        call!("batch", "calls" => FieldSchema::Sequence(&CALL)),
        call!("as_derivative", "index" => U16, "call" => CALL),
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
        call!("add_proxy", "proxy" => ACCOUNT_ID, "proxy_type" => PROXY_TYPE),
        call!("remove_proxy", "proxy" => ACCOUNT_ID, "proxy_type" => PROXY_TYPE),
        call!("remove_proxies"),
        call!("anonymous", "proxy_type" => PROXY_TYPE, "index" => U16),
        call!(
            "kill_anonymous",
            "spawner" => ACCOUNT_ID,
            "proxy_type" => PROXY_TYPE,
            "index" => U16,
            "height" => COMPACT_U32,
            "ext_index" => COMPACT_U32
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
            "call" => CALL
        ),
        call!(
            "approve_as_multi",
            "threshold" => U16,
            "other_signatories" => FieldSchema::Sequence(&ACCOUNT_ID),
            "maybe_timepoint" => FieldSchema::Option(&TIMEPOINT),
            "call_hash" => HASH
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

/// Call table for `V11`.
pub static CALL_TABLE_V11: CallTable = CallTable {
    version: RuntimeVersion::V11,
    pallets: &[
        SYSTEM, TIMESTAMP, INDICES, BALANCES, STAKING, SESSION, UTILITY, IDENTITY, RECOVERY, VESTING,
        SCHEDULER, SUDO, PROXY, MULTISIG,
    ],
};

//! Startup dataset: ten fixed characters plus generated filler rows.
//!
//! The fixed rows mirror the spreadsheet layout (row 1 is the header, so
//! data starts at row 2). Filler rows exist to exercise pagination and
//! are generated from a seeded PRNG, so the same [`SeedConfig`] always
//! yields the same collection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roster_types::CharacterRecord;
use serde::Deserialize;

/// Number of the first generated filler character.
const FIRST_FILLER: u32 = 11;

/// Attribute labels cycled through by filler rows.
const FILLER_ATTRIBUTES: [&str; 5] = ["アクティブ", "ラブリー", "フレンドリー", "リラックス", "マイペース"];

/// Name prefixes cycled through by filler rows.
const FILLER_NAMES: [&str; 5] = ["テストキャラ", "サンプル", "ダミー", "モック", "デモ"];

/// Chance a filler row is special-shop eligible.
const SPECIAL_SHOP_CHANCE: f64 = 0.3;

/// Chance a filler row is great-shop eligible.
const GREAT_SHOP_CHANCE: f64 = 0.3;

/// Chance a filler row is already owned.
const OWNED_CHANCE: f64 = 0.2;

/// Chance a filler row has a priority.
const PRIORITY_CHANCE: f64 = 0.4;

// -----------------------------------------------------------------------
// Configuration
// -----------------------------------------------------------------------

/// Controls how the startup collection is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SeedConfig {
    /// PRNG seed for filler rows.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of filler rows appended after the fixed ones.
    #[serde(default = "default_filler_count")]
    pub filler_count: u32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            filler_count: default_filler_count(),
        }
    }
}

const fn default_seed() -> u64 {
    42
}

const fn default_filler_count() -> u32 {
    40
}

// -----------------------------------------------------------------------
// Dataset
// -----------------------------------------------------------------------

#[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
fn fixed(
    row_index: u32,
    id: &str,
    name: &str,
    attribute: &str,
    description: &str,
    special: bool,
    great: bool,
    owned: bool,
    priority: Option<i32>,
) -> CharacterRecord {
    CharacterRecord {
        row_index,
        id: id.to_owned(),
        name: name.to_owned(),
        attribute: attribute.to_owned(),
        description: description.to_owned(),
        special_shop_eligible: special,
        great_shop_eligible: great,
        owned,
        priority,
    }
}

/// The hand-written characters at rows 2 through 11.
pub fn fixed_characters() -> Vec<CharacterRecord> {
    vec![
        fixed(2, "001", "サーバル", "アクティブ", "サバンナの案内人", true, false, false, Some(9)),
        fixed(3, "002", "フェネック", "アクティブ", "砂漠の知恵袋", false, true, true, None),
        fixed(4, "003", "アライグマ", "アクティブ", "手先が器用なのだ", false, false, false, Some(7)),
        fixed(5, "004", "かばん", "フレンドリー", "みんなの友達", true, true, true, None),
        fixed(6, "005", "ラッキービースト", "マイペース", "パークガイド", false, false, false, Some(8)),
        fixed(7, "006", "トキ", "ラブリー", "美しい歌声", true, false, false, Some(6)),
        fixed(8, "007", "アルパカ・スリ", "ラブリー", "カフェの看板娘", false, true, true, None),
        fixed(9, "008", "ツチノコ", "マイペース", "幻の存在", false, false, false, Some(10)),
        fixed(10, "009", "ヒグマ", "リラックス", "森の番人", true, false, true, None),
        fixed(11, "010", "リカオン", "アクティブ", "チームワーク抜群", false, true, false, Some(5)),
    ]
}

/// Build the full startup collection: fixed rows followed by filler rows.
pub fn seed_characters(config: &SeedConfig) -> Vec<CharacterRecord> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut characters = fixed_characters();

    let last = FIRST_FILLER.saturating_add(config.filler_count);
    for n in FIRST_FILLER..last {
        characters.push(filler(n, &mut rng));
    }

    tracing::debug!(
        seed = config.seed,
        count = characters.len(),
        "Seeded character collection"
    );

    characters
}

/// Generate filler character number `n`.
fn filler(n: u32, rng: &mut impl Rng) -> CharacterRecord {
    let special_shop_eligible = rng.random_bool(SPECIAL_SHOP_CHANCE);
    let great_shop_eligible = rng.random_bool(GREAT_SHOP_CHANCE);
    let owned = rng.random_bool(OWNED_CHANCE);
    let priority = if rng.random_bool(PRIORITY_CHANCE) {
        Some(rng.random_range(1..=10))
    } else {
        None
    };

    CharacterRecord {
        row_index: n.saturating_add(1),
        id: format!("{n:03}"),
        name: format!("{}{n}", pick(&FILLER_NAMES, n)),
        attribute: pick(&FILLER_ATTRIBUTES, n).to_owned(),
        description: format!("テスト用HC情報{n}"),
        special_shop_eligible,
        great_shop_eligible,
        owned,
        priority,
    }
}

/// Cycle through `pool` by `n`.
fn pick(pool: &[&'static str], n: u32) -> &'static str {
    usize::try_from(n)
        .ok()
        .and_then(|n| n.checked_rem(pool.len()))
        .and_then(|k| pool.get(k))
        .copied()
        .unwrap_or_default()
}

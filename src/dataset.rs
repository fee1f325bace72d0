//! Declarative descriptions of the five remote datasets.

/// Remote CSV locations
const URL_GAME_ODDS: &str = "https://www.dropbox.com/scl/fi/yzjy8pwhlvxf45ccr92a4/all_game_odds.csv?rlkey=u3wz73ngkdu6ng74hbi2tstb4&dl=1";
const URL_BATTER_PROPS: &str = "https://www.dropbox.com/scl/fi/za45vwhyl8nbtqgfpqu45/analyzed_batter_prop_df.csv?rlkey=aohu3pvszy3s1f8b6hyj6buvm&dl=1";
const URL_PITCHER_PROPS: &str = "https://www.dropbox.com/scl/fi/jxwanz1h6ki5g0cx3zi5p/analyzed_pitcher_prop_df.csv?rlkey=9bebuvrznodi810tobu6o1ov8&dl=1";
const URL_DFS_SUMMARY: &str = "https://www.dropbox.com/scl/fi/8m2k1q7d40f3n6xrv5t2w/dfs_player_summary.csv?rlkey=2v8q0n5mh3xkcp7awj91dtye6&dl=1";
const URL_BATTER_PROP_HISTORY: &str = "https://www.dropbox.com/scl/fi/5t9qv2jwq8m1kc3l0rn7p/batter_prop_history.csv?rlkey=9fk2lhw7xq4n1vs8yd30cbm5u&dl=1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DatasetId {
    GameOdds,
    BatterProps,
    PitcherProps,
    DfsSummary,
    BatterPropHistory,
}

impl DatasetId {
    pub const ALL: [DatasetId; 5] = [
        DatasetId::GameOdds,
        DatasetId::BatterProps,
        DatasetId::PitcherProps,
        DatasetId::DfsSummary,
        DatasetId::BatterPropHistory,
    ];

    pub fn spec(self) -> &'static DatasetSpec {
        match self {
            DatasetId::GameOdds => &SPECS[0],
            DatasetId::BatterProps => &SPECS[1],
            DatasetId::PitcherProps => &SPECS[2],
            DatasetId::DfsSummary => &SPECS[3],
            DatasetId::BatterPropHistory => &SPECS[4],
        }
    }
}

/// A column computed at load time as `source * scale`, always f64.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedColumn {
    pub name: &'static str,
    pub source: &'static str,
    pub scale: f64,
}

/// Drop rows whose `column` equals `value`. Rows with a null value in
/// `column` are kept.
#[derive(Clone, Debug, PartialEq)]
pub struct ExcludeRule {
    pub column: &'static str,
    pub value: &'static str,
}

/// Everything the loader and the filter panel need to know about one
/// dataset: where it lives, how its columns are renamed, derived and
/// projected, and which columns get filter controls.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetSpec {
    pub id: DatasetId,
    pub title: &'static str,
    pub url: &'static str,
    /// Source column name -> presented column name, applied before
    /// derivation and projection.
    pub renames: &'static [(&'static str, &'static str)],
    pub exclude: Option<ExcludeRule>,
    pub derived: &'static [DerivedColumn],
    /// Presented columns kept in the loaded frame, in display order.
    pub projection: &'static [&'static str],
    /// Columns with a multiselect control.
    pub categorical: &'static [&'static str],
    /// Columns with a range control.
    pub numeric: &'static [&'static str],
}

const ROI_PCT: DerivedColumn = DerivedColumn {
    name: "ROI (%)",
    source: "roi",
    scale: 100.0,
};

static SPECS: [DatasetSpec; 5] = [
    DatasetSpec {
        id: DatasetId::GameOdds,
        title: "All Game Odds",
        url: URL_GAME_ODDS,
        renames: &[("matchup_folder", "Game")],
        exclude: Some(ExcludeRule {
            column: "market",
            value: "spreads",
        }),
        derived: &[ROI_PCT],
        projection: &[
            "Game",
            "last_modified",
            "bookmaker",
            "market",
            "name",
            "price",
            "americanOdds",
            "point",
            "away_or_home",
            "prob_hit",
            "prob_push",
            "ROI (%)",
            "kelly",
        ],
        categorical: &["Game", "market", "bookmaker"],
        numeric: &["ROI (%)", "kelly", "americanOdds"],
    },
    DatasetSpec {
        id: DatasetId::BatterProps,
        title: "Batter Props",
        url: URL_BATTER_PROPS,
        renames: &[("matchup_folder", "Game")],
        exclude: None,
        derived: &[ROI_PCT],
        projection: &[
            "Game",
            "last_modified",
            "player_id",
            "player_name",
            "bookmaker",
            "market",
            "name",
            "point",
            "price",
            "prob",
            "ROI (%)",
            "kelly",
        ],
        categorical: &["Game", "player_name", "bookmaker", "market"],
        numeric: &["ROI (%)", "kelly"],
    },
    DatasetSpec {
        id: DatasetId::PitcherProps,
        title: "Pitcher Props",
        url: URL_PITCHER_PROPS,
        renames: &[("matchup_folder", "Game")],
        exclude: None,
        derived: &[ROI_PCT],
        projection: &[
            "Game",
            "last_modified",
            "player_id",
            "player_name",
            "bookmaker",
            "market",
            "name",
            "point",
            "price",
            "prob",
            "ROI (%)",
            "kelly",
        ],
        categorical: &["Game", "player_name", "bookmaker", "market"],
        numeric: &["ROI (%)", "kelly"],
    },
    DatasetSpec {
        id: DatasetId::DfsSummary,
        title: "DFS Player Summary",
        url: URL_DFS_SUMMARY,
        renames: &[("game_key", "Game")],
        exclude: None,
        derived: &[],
        projection: &[
            "Game",
            "last_modified",
            "player_name",
            "team",
            "position",
            "salary",
            "proj_points",
            "value",
        ],
        categorical: &["Game", "team", "position"],
        numeric: &["salary", "proj_points"],
    },
    DatasetSpec {
        id: DatasetId::BatterPropHistory,
        title: "Batter Prop History",
        url: URL_BATTER_PROP_HISTORY,
        renames: &[("game_key", "Game"), ("price", "Decimal Odds")],
        exclude: None,
        derived: &[ROI_PCT],
        projection: &[
            "Game",
            "date",
            "player_name",
            "bookmaker",
            "market",
            "name",
            "point",
            "Decimal Odds",
            "prob",
            "ROI (%)",
            "result",
            "kelly",
        ],
        categorical: &["Game", "player_name", "bookmaker", "market"],
        numeric: &["ROI (%)", "Decimal Odds"],
    },
];

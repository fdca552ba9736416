use phf::phf_map;

/// Static lookup from stats-API team id to the standard 3-letter abbreviation.
///
/// The directory endpoint returns full names only; the abbreviation shown in
/// the team list comes from this table. Unknown ids (future expansion teams)
/// simply render without one.
static TEAM_ABBREVS: phf::Map<i64, &'static str> = phf_map! {
    1i64 => "NJD",
    2i64 => "NYI",
    3i64 => "NYR",
    4i64 => "PHI",
    5i64 => "PIT",
    6i64 => "BOS",
    7i64 => "BUF",
    8i64 => "MTL",
    9i64 => "OTT",
    10i64 => "TOR",
    12i64 => "CAR",
    13i64 => "FLA",
    14i64 => "TBL",
    15i64 => "WSH",
    16i64 => "CHI",
    17i64 => "DET",
    18i64 => "NSH",
    19i64 => "STL",
    20i64 => "CGY",
    21i64 => "COL",
    22i64 => "EDM",
    23i64 => "VAN",
    24i64 => "ANA",
    25i64 => "DAL",
    26i64 => "LAK",
    28i64 => "SJS",
    29i64 => "CBJ",
    30i64 => "MIN",
    52i64 => "WPG",
    53i64 => "ARI",
    54i64 => "VGK",
    55i64 => "SEA",
};

pub fn team_id_to_abbrev(team_id: i64) -> Option<&'static str> {
    TEAM_ABBREVS.get(&team_id).copied()
}

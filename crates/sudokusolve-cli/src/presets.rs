//! Built-in puzzles selectable with `--board-preset`.

/// Preset puzzles, each with a single solution. Index 0 is easy; the later
/// entries lean harder (3 is Inkala's well-known "hardest sudoku").
pub const PRESETS: [&str; 7] = [
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
    "100007090030020008009600500005300900010080002600004000300000010040000007007000300",
    "005300000800000020070010500400005300010070006003200080060500009004000030000009700",
    "800000000003600000070090200050007000000045700000100030001000068008500010090000400",
    "003020600900305001001806400008102900700000008006708200002609500800203009005010300",
    "200080300060070084030500209000105408000000000402706000301007040720040060004010003",
    "000000000000003085001020000000507000004000100090000000500000073002010000000040009",
];

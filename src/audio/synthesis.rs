//! Procedural music synthesis configuration.

/// Glicol composition (procedural music code)
pub const GLICOL_COMPOSITION: &str = r#"
~gate: speed 2.0 >> seq 36 _ 48 _36 60
~amp: ~gate >> envperc 0.002 0.25
~pit: ~gate >> mul 130.81
~bass: squ ~pit >> mul ~amp >> lpf ~cut 1.0 >> mul 0.25
~cut: sin 0.15 >> mul 600 >> add 900
o: ~bass >> plate 0.08
"#;

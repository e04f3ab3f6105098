//! Alpine Linux logo.

use super::Logo;
use crate::ui::colors::Colors;

pub const LOGO: Logo = Logo {
    colors: &[Colors::BlueBright, Colors::BlueNormal],
    lines: &[
        r#"{c0}       .hddddddddddddddddddddddh.       "#,
        r#"{c0}      :dddddddddddddddddddddddddd:      "#,
        r#"{c0}     /dddddddddddddddddddddddddddd/     "#,
        r#"{c0}    +dddddddddddddddddddddddddddddd+    "#,
        r#"{c0}  `sdddddddddddddddddddddddddddddddds`  "#,
        r#"{c0} `ydddddddddddd++hdddddddddddddddddddy` "#,
        r#"{c0}.hddddddddddd+`  `+ddddh:-sdddddddddddh."#,
        r#"{c0}hdddddddddd+`      `+y:    .sddddddddddh"#,
        r#"{c0}ddddddddh+`   `//`   `.`     -sddddddddd"#,
        r#"{c0}ddddddh+`   `/hddh/`   `:s-    -sddddddd"#,
        r#"{c0}ddddh+`   `/+/dddddh/`   `+s-    -sddddd"#,
        r#"{c0}ddd+`   `/o` :dddddddh/`   `oy-    .yddd"#,
        r#"{c0}hdddyo+ohddyosdddddddddho+oydddy++ohdddh"#,
        r#"{c0}.hddddddddddddddddddddddddddddddddddddh."#,
        r#"{c0} `yddddddddddddddddddddddddddddddddddy` "#,
        r#"{c0}  `sdddddddddddddddddddddddddddddddds`  "#,
        r#"{c0}    +dddddddddddddddddddddddddddddd+    "#,
        r#"{c0}     /dddddddddddddddddddddddddddd/     "#,
        r#"{c0}      :dddddddddddddddddddddddddd:      "#,
        r#"{c0}       .hddddddddddddddddddddddh.       "#,
    ],
};

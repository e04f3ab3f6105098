//! Kali Linux logo.

use super::Logo;
use crate::ui::colors::Colors;

pub const LOGO: Logo = Logo {
    colors: &[Colors::BlueBright, Colors::WhiteBright],
    lines: &[
        r#"{c0}..............                                  "#,
        r#"{c0}            ..,;:ccc,.                          "#,
        r#"{c0}          ......''';lxO.                        "#,
        r#"{c0}.....''''..........,:ld;                        "#,
        r#"{c0}           .';;;:::;,,.x,                       "#,
        r#"{c0}      ..'''.            0Xxoc:,.  ...           "#,
        r#"{c0}  ....                ,ONkc;,;cokOdc',.         "#,
        r#"{c0} .                   OMo           ':{c1}dd{c0}o.       "#,
        r#"{c0}                    dMc               :OO;      "#,
        r#"{c0}                    0M.                 .:o.    "#,
        r#"{c0}                    ;Wd                         "#,
        r#"{c0}                     ;XO,                       "#,
        r#"{c0}                       ,d0Odlc;,..              "#,
        r#"{c0}                           ..',;:cdOOd::,.      "#,
        r#"{c0}                                    .:d;.':;.   "#,
        r#"{c0}                                       'd,  .'  "#,
        r#"{c0}                                         ;l   .."#,
        r#"{c0}                                          .o    "#,
        r#"{c0}                                            c   "#,
        r#"{c0}                                            .'  "#,
        r#"{c0}                                             .  "#,
    ],
};

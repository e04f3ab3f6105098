//! Arch Linux logo.

use super::Logo;
use crate::ui::colors::Colors;

pub const LOGO: Logo = Logo {
    colors: &[Colors::CyanBright, Colors::CyanNormal],
    lines: &[
        r#"{c0}                   -`                 "#,
        r#"{c0}                  .o+`                "#,
        r#"{c0}                 `ooo/                "#,
        r#"{c0}                `+oooo:               "#,
        r#"{c0}               `+oooooo:              "#,
        r#"{c0}               -+oooooo+:             "#,
        r#"{c0}             `/:-:++oooo+:            "#,
        r#"{c0}            `/++++/+++++++:           "#,
        r#"{c0}           `/++++++++++++++:          "#,
        r#"{c0}          `/+++o{c1}oooooooo{c0}oooo/`        "#,
        r#"{c1}         {c0}./{c1}ooosssso++osssssso{c0}+`       "#,
        r#"{c1}        .oossssso-````/ossssss+`      "#,
        r#"{c1}       -osssssso.      :ssssssso.     "#,
        r#"{c1}      :osssssss/        osssso+++.    "#,
        r#"{c1}     /ossssssss/        +ssssooo/-    "#,
        r#"{c1}   `/ossssso+/:-        -:/+osssso+-  "#,
        r#"{c1}  `+sso+:-`                 `.-/+oso: "#,
        r#"{c1} `++:.                           `-/+/"#,
        r#"{c1} .`                                 `/"#,
    ],
};

//! Ubuntu logo.

use super::Logo;
use crate::ui::colors::Colors;

pub const LOGO: Logo = Logo {
    colors: &[Colors::RedBright, Colors::RedNormal, Colors::YellowBright],
    lines: &[
        r#"{c0}            .-/+oossssoo+/-.            "#,
        r#"{c0}        `:+ssssssssssssssssss+:`        "#,
        r#"{c0}      -+ssssssssssssssssssyyssss+-      "#,
        r#"{c0}    .ossssssssssssssssss{c1}dMMMNy{c0}sssso.    "#,
        r#"{c0}   /sssssssssss{c1}hdmmNNmmyNMMMMh{c0}ssssss/   "#,
        r#"{c0}  +sssssssss{c1}hmydMMMMMMMNddddy{c0}ssssssss+  "#,
        r#"{c0} /ssssssss{c1}hNMMMyhhyyyyhmNMMMNh{c0}ssssssss/ "#,
        r#"{c0}.ssssssss{c1}dMMMNh{c0}ssssssssss{c1}hNMMMd{c0}ssssssss."#,
        r#"{c0}+ssss{c1}hhhyNMMNy{c0}ssssssssssss{c1}yNMMMy{c0}sssssss+"#,
        r#"{c0}ossy{c1}NMMMNyMMh{c0}ssssssssssssss{c1}hmmmh{c0}ssssssso"#,
        r#"{c0}ossy{c1}NMMMNyMMh{c0}ssssssssssssss{c1}hmmmh{c0}ssssssso"#,
        r#"{c0}+ssss{c1}hhhyNMMNy{c0}ssssssssssss{c1}yNMMMy{c0}sssssss+"#,
        r#"{c0}.ssssssss{c1}dMMMNh{c0}ssssssssss{c1}hNMMMd{c0}ssssssss."#,
        r#"{c0} /ssssssss{c1}hNMMMyhhyyyyhdNMMMNh{c0}ssssssss/ "#,
        r#"{c0}  +sssssssss{c1}dmydMMMMMMMMddddy{c0}ssssssss+  "#,
        r#"{c0}   /sssssssssss{c1}hdmNNNNmyNMMMMh{c0}ssssss/   "#,
        r#"{c0}    .ossssssssssssssssss{c1}dMMMNy{c0}sssso.    "#,
        r#"{c0}      -+sssssssssssssssss{c1}yyy{c0}ssss+-      "#,
        r#"{c0}        `:+ssssssssssssssssss+:`        "#,
        r#"{c0}            .-/+oossssoo+/-.            "#,
    ],
};

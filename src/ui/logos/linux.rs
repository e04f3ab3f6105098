//! generic Linux logo.

use super::Logo;
use crate::ui::colors::Colors;

pub const LOGO: Logo = Logo {
    colors: &[Colors::WhiteBright, Colors::YellowBright],
    lines: &[
        r#"{c0}         #####        "#,
        r#"{c0}        #######       "#,
        r#"{c0}        ##{c1}O{c0}#{c1}O{c0}##       "#,
        r#"{c0}        #{c1}#####{c0}#       "#,
        r#"{c0}      ##{c1}##{c0}###{c1}##{c0}##     "#,
        r#"{c0}     #{c1}##########{c0}##    "#,
        r#"{c0}    #{c1}############{c0}##   "#,
        r#"{c0}    #{c1}############{c0}###  "#,
        r#"{c1}   ##{c0}#{c1}###########{c0}##{c1}#  "#,
        r#"{c1} ######{c0}#{c1}#######{c0}#{c1}######"#,
        r#"{c1} #######{c0}#{c1}#####{c0}#{c1}#######"#,
        r#"{c1}   #####{c0}#######{c1}#####  "#,
    ],
};

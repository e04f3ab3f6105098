//! Debian logo.

use super::Logo;
use crate::ui::colors::Colors;

pub const LOGO: Logo = Logo {
    colors: &[Colors::RedBright, Colors::RedNormal],
    lines: &[
        r#"{c0}         _,met$$$$$gg.       "#,
        r#"{c0}      ,g$$$$$$$$$$$$$$$P.    "#,
        r#"{c0}    ,g$$P""       """Y$$.".  "#,
        r#"{c0}   ,$$P'              `$$$.  "#,
        r#"{c0}  ',$$P       ,ggs.     `$$b:"#,
        r#"{c0}  `d$$'     ,$P"'   {c1}.{c0}    $$$ "#,
        r#"{c0}   $$P      d$'     {c1},{c0}    $$P "#,
        r#"{c0}   $$:      $$.   {c1}-{c0}    ,d$$' "#,
        r#"{c0}   $$;      Y$b._   _,d$P'   "#,
        r#"{c0}   Y$$.    {c1}`.{c0}`"Y$$$$P"'      "#,
        r#"{c0}   `$$b      {c1}"-.__           "#,
        r#"{c0}    `Y$$                     "#,
        r#"{c0}     `Y$$.                   "#,
        r#"{c0}       `$$b.                 "#,
        r#"{c0}         `Y$$b.              "#,
        r#"{c0}            `"Y$b._          "#,
        r#"{c0}                `"""         "#,
    ],
};

//! CentOS logo.

use super::Logo;
use crate::ui::colors::Colors;

pub const LOGO: Logo = Logo {
    colors: &[Colors::YellowNormal, Colors::GreenNormal, Colors::BlueNormal, Colors::MagentaNormal, Colors::WhiteBright],
    lines: &[
        r#"{c0}                 ..                 "#,
        r#"{c0}               .PLTJ.               "#,
        r#"{c0}              <><><><>              "#,
        r#"{c1}     KKSSV' 4KKK {c0}LJ{c3} KKKL.'VSSKK     "#,
        r#"{c1}     KKV' 4KKKKK {c0}LJ{c3} KKKKAL 'VKK     "#,
        r#"{c1}     V' ' 'VKKKK {c0}LJ{c3} KKKKV' ' 'V     "#,
        r#"{c1}     .4MA.' 'VKK {c0}LJ{c3} KKV' '.4Mb.     "#,
        r#"{c3}   . {c1}KKKKKA.' 'V {c0}LJ{c3} V' '.4KKKKK {c2}.   "#,
        r#"{c3} .4D {c1}KKKKKKKA.'' {c0}LJ{c3} ''.4KKKKKKK {c2}FA. "#,
        r#"{c3}<QDD ++++++++++++  {c2}++++++++++++ GFD>"#,
        r#"{c3} 'VD {c2}KKKKKKKK'.. {c1}LJ {c0}..'KKKKKKKK {c2}FV  "#,
        r#"{c3}   ' {c2}VKKKKK'. .4 {c1}LJ {c0}K. .'KKKKKV {c2}'   "#,
        r#"{c2}      'VK'. .4KK {c1}LJ {c0}KKA. .'KV'      "#,
        r#"{c2}     A. . .4KKKK {c1}LJ {c0}KKKKA. . .4     "#,
        r#"{c2}     KKA. 'KKKKK {c1}LJ {c0}KKKKK' .4KK     "#,
        r#"{c2}     KKSSA. VKKK {c1}LJ {c0}KKKV .4SSKK     "#,
        r#"{c1}              <><><><>              "#,
        r#"{c1}               'MKKM'               "#,
        r#"{c1}                 ''                 "#,
    ],
};

//! Linux Mint logo.

use super::Logo;
use crate::ui::colors::Colors;

pub const LOGO: Logo = Logo {
    colors: &[Colors::GreenBright, Colors::WhiteBright],
    lines: &[
        r#"{c0} MMMMMMMMMMMMMMMMMMMMMMMMMmds+.     "#,
        r#"{c0} MMm----::-://////////////oymNMd+`  "#,
        r#"{c0} MMd      {c1}/++                {c0}-sNMd: "#,
        r#"{c0} MMNso/`  {c1}dMM    `.::-. .-::.` {c0}.hMN:"#,
        r#"{c0} ddddMMh  {c1}dMM   :hNMNMNhNMNMNh: {c0}`NMm"#,
        r#"{c0}     NMm  {c1}dMM  .NMN/-+MMM+-/NMN` {c0}dMM"#,
        r#"{c0}     NMm  {c1}dMM  -MMm  `MMM   dMM. {c0}dMM"#,
        r#"{c0}     NMm  {c1}dMM  -MMm  `MMM   dMM. {c0}dMM"#,
        r#"{c0}     NMm  {c1}dMM  .mmd  `mmm   yMM. {c0}dMM"#,
        r#"{c0}     NMm  {c1}dMM`  ..`   ...   ydm. {c0}dMM"#,
        r#"{c0}     hMM- {c1}+MMd/-------...-:sdds  {c0}dMM"#,
        r#"{c0}     -NMm- {c1}:hNMNNNmdddddddddy/`  {c0}dMM"#,
        r#"{c0}      -dMNs-{c1}``-::::-------.``    {c0}dMM"#,
        r#"{c0}       `/dMNmy+/:-------------:/yMMM"#,
        r#"{c0}          ./ydNMMMMMMMMMMMMMMMMMMMMM"#,
        r#"{c0}             \.MMMMMMMMMMMMMMMMMMM  "#,
    ],
};

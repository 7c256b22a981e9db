// ASCII icon art for the display card
//
// All three icons are the same height and line width so the card does not
// jump when the state changes. Lines are padded with spaces; the renderer
// centers each line, so equal widths keep the art aligned.

pub const ICE_CREAM: &[&str] = &[
    r"  .-~~~-.  ",
    r" ( *   * ) ",
    r"  `~._.~'  ",
    r"  \=====/  ",
    r"   \===/   ",
    r"    \=/    ",
    r"     V     ",
];

pub const LAUGHING: &[&str] = &[
    r"  .-~~~-.  ",
    r" / ^   ^ \ ",
    r" |       | ",
    r" | \___/ | ",
    r" \       / ",
    r"  `~___~'  ",
    r"   ha ha   ",
];

pub const SAD_TEAR: &[&str] = &[
    r"  .-~~~-.  ",
    r" / .   . \ ",
    r" |    o  | ",
    r" |  .-.  | ",
    r" \       / ",
    r"  `~___~'  ",
    r"           ",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_share_height_and_width() {
        for art in [ICE_CREAM, LAUGHING, SAD_TEAR] {
            assert_eq!(art.len(), ICE_CREAM.len());
            for line in art {
                assert_eq!(line.len(), ICE_CREAM[0].len());
            }
        }
    }
}

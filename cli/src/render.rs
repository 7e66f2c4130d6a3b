use std::io::{self, Write};

use clap::ValueEnum;
use minegrid_core::{CellView, PlainSymbols, Snapshot, SymbolSet};

/// Width of the row-number margin, enough for the largest row count.
const ROW_LABEL_WIDTH: usize = 3;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Style {
    /// ASCII symbols
    #[default]
    Plain,
    /// Emoji symbols
    Emoji,
}

impl Style {
    pub fn symbols(self) -> &'static dyn SymbolSet {
        match self {
            Self::Plain => &PlainSymbols,
            Self::Emoji => &EmojiSymbols,
        }
    }

    /// Every cell takes two terminal columns: plain symbols get a trailing space, emoji are already double width.
    fn separator(self) -> &'static str {
        match self {
            Self::Plain => " ",
            Self::Emoji => "",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EmojiSymbols;

// keycaps render half width in most terminals, hence the padding
const KEYCAPS: [&str; 9] = [
    "\u{2b1c}",
    "1\u{fe0f}\u{20e3} ",
    "2\u{fe0f}\u{20e3} ",
    "3\u{fe0f}\u{20e3} ",
    "4\u{fe0f}\u{20e3} ",
    "5\u{fe0f}\u{20e3} ",
    "6\u{fe0f}\u{20e3} ",
    "7\u{fe0f}\u{20e3} ",
    "8\u{fe0f}\u{20e3} ",
];

impl SymbolSet for EmojiSymbols {
    fn symbol(&self, view: CellView) -> &str {
        match view {
            CellView::Hidden => "\u{1f7e6}",
            CellView::Flagged => "\u{1f38c}",
            CellView::Revealed(count) => KEYCAPS.get(usize::from(count)).copied().unwrap_or("\u{2753}"),
            CellView::Mine => "\u{1f4a5}",
        }
    }
}

/// Writes the board with 1-indexed column rulers on top and row numbers on the left.
pub fn write_board<W: Write>(out: &mut W, snapshot: &Snapshot, style: Style) -> io::Result<()> {
    let (_, cols) = snapshot.size();
    let margin = " ".repeat(ROW_LABEL_WIDTH + 1);

    // Read top to bottom, every tenth column spells out its full number.
    let ruler = |place: u16| {
        let marks: String = (1..=u16::from(cols))
            .map(|col| {
                if place == 1 || (col % 10 == 0 && col >= place) {
                    format!("{} ", col / place % 10)
                } else {
                    "  ".to_owned()
                }
            })
            .collect();
        format!("{margin}{marks}").trim_end().to_owned()
    };
    for place in [100, 10, 1] {
        if u16::from(cols) >= place {
            writeln!(out, "{}", ruler(place))?;
        }
    }

    for (index, row) in snapshot.symbols(style.symbols()).into_iter().enumerate() {
        let mut line = format!("{:>width$} ", index + 1, width = ROW_LABEL_WIDTH);
        for symbol in row {
            line.push_str(symbol);
            line.push_str(style.separator());
        }
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

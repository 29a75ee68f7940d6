//! Terminal rendering of the paginated help table.

use std::io::{self, BufRead, Write};

use console::{measure_text_width, pad_str, style, Alignment};
use hmac_rps_core::games::{GameRules, HelpPage, HelpTable, PagerCommand, PagerState, Verdict};
use tracing::debug;

use crate::menu::read_line_lossy;

const CORNER_LABEL: &str = "PC \\ User";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Show the table and handle navigation until the user exits or input ends
pub fn browse<G, R, W>(
    table: &mut HelpTable<'_, G>,
    input: &mut R,
    output: &mut W,
    clear_screen: bool,
) -> io::Result<()>
where
    G: GameRules,
    R: BufRead,
    W: Write,
{
    loop {
        if clear_screen {
            write!(output, "{CLEAR_SCREEN}")?;
        }
        render_page(output, &table.page())?;
        writeln!(output)?;
        writeln!(output, "Commands: [n]ext, [p]revious, [e]xit")?;
        output.flush()?;

        let Some(line) = read_line_lossy(input)? else {
            return Ok(());
        };

        match line.parse::<PagerCommand>() {
            Ok(command) => {
                if table.apply(command) == PagerState::Closed {
                    return Ok(());
                }
                debug!(page = table.current_page(), "Help table page");
            }
            Err(e) => {
                debug!(error = %e, "Rejected help table command");
                writeln!(output, "Invalid command. Use [n]ext, [p]revious, or [e]xit.")?;
            }
        }
    }
}

/// Draw one page as a bordered text table
pub fn render_page<W: Write>(output: &mut W, page: &HelpPage<'_>) -> io::Result<()> {
    let first_width = page
        .rows
        .iter()
        .map(|row| measure_text_width(row.label))
        .chain(std::iter::once(measure_text_width(CORNER_LABEL)))
        .max()
        .unwrap_or_default();
    let widths: Vec<usize> = std::iter::once(first_width)
        .chain(
            page.columns
                .iter()
                .map(|label| measure_text_width(label).max(4)),
        )
        .collect();

    writeln!(
        output,
        "Help Table - Columns Page {}/{}",
        page.number, page.total
    )?;

    let border = border_line(&widths);
    writeln!(output, "{border}")?;

    let header: Vec<String> = std::iter::once(CORNER_LABEL)
        .chain(page.columns.iter().copied())
        .zip(&widths)
        .map(|(text, &width)| pad_str(text, width, Alignment::Center, None).into_owned())
        .collect();
    writeln!(output, "| {} |", header.join(" | "))?;
    writeln!(output, "{border}")?;

    for row in &page.rows {
        let mut cells = vec![pad_str(row.label, widths[0], Alignment::Left, None).into_owned()];
        for (verdict, &width) in row.cells.iter().zip(&widths[1..]) {
            cells.push(verdict_cell(*verdict, width));
        }
        writeln!(output, "| {} |", cells.join(" | "))?;
    }
    writeln!(output, "{border}")
}

fn border_line(widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+", segments.join("+"))
}

fn verdict_cell(verdict: Verdict, width: usize) -> String {
    let text = pad_str(verdict.short_label(), width, Alignment::Center, None).into_owned();
    match verdict {
        Verdict::Draw => style(text).yellow().to_string(),
        Verdict::Win => style(text).green().to_string(),
        Verdict::Lose => style(text).red().to_string(),
    }
}

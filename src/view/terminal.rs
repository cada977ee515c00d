//! Plain-text dump of a [`MemorySurface`] for terminals.

use std::io::{self, Write};

use super::surface::{regions, ListEntry, MemorySurface, SECTIONS};

/// Write the visible mode region of `surface` to `out`.
///
/// Hidden regions are skipped, so an idle page writes nothing.
pub fn write_page<W: Write>(surface: &MemorySurface, out: &mut W) -> io::Result<()> {
    if surface.is_visible(regions::LOADING) {
        writeln!(out, "Loading...")?;
    }
    if surface.is_visible(regions::ERROR) {
        writeln!(
            out,
            "Error: {}",
            surface.text(regions::ERROR_MESSAGE).unwrap_or_default()
        )?;
    }
    if surface.is_visible(regions::RESULT) {
        write_result(surface, out)?;
    }
    Ok(())
}

fn write_result<W: Write>(surface: &MemorySurface, out: &mut W) -> io::Result<()> {
    if let Some(timing) = surface.text(regions::EXECUTION_TIME) {
        writeln!(out, "{}", timing)?;
    }

    for section in SECTIONS {
        writeln!(out)?;
        writeln!(out, "== {} ==", section.title)?;
        for (id, label) in section.fields {
            writeln!(out, "{}: {}", label, surface.text(id).unwrap_or_default())?;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "== Items ({}) ==",
        surface.text(regions::ITEMS_COUNT).unwrap_or_default()
    )?;
    for entry in surface.list(regions::ITEMS_LIST) {
        match entry {
            ListEntry::Placeholder(text) => writeln!(out, "{}", text)?,
            ListEntry::Item(view) => {
                writeln!(out, "-- {} --", view.title)?;
                for (label, value) in &view.fields {
                    writeln!(out, "  {}: {}", label, value)?;
                }
            }
        }
    }
    Ok(())
}

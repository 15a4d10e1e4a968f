use std::io::Write;

use anyhow::Result;
use langcat_types::{Item, truncate_text};
use owo_colors::OwoColorize;

use crate::args::OutputFormat;
use crate::presentation::presenters::{present_cards, present_modal};
use crate::presentation::view_models::{CardGridViewModel, ChartViewModel, ModalViewModel};

/// Widest a chart label column may get before labels are truncated
const MAX_LABEL_WIDTH: usize = 20;

const ITEM_CSV_HEADER: [&str; 6] = [
    "name",
    "description",
    "releaseYear",
    "imageUrl",
    "link",
    "popularity",
];

/// Writes catalog output for the non-interactive commands
pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    pub fn render_items(&self, out: &mut impl Write, items: &[Item]) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(items)?)?;
            }
            OutputFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(out);
                wtr.write_record(ITEM_CSV_HEADER)?;
                for item in items {
                    write_item_record(&mut wtr, item)?;
                }
                wtr.flush()?;
            }
            OutputFormat::Plain => match present_cards(items) {
                CardGridViewModel::Cards { cards } => {
                    for (i, card) in cards.iter().enumerate() {
                        if i > 0 {
                            writeln!(out)?;
                        }
                        self.write_heading(out, &card.title)?;
                        if !card.description.is_empty() {
                            writeln!(out, "  {}", card.description)?;
                        }
                        writeln!(out, "  {}", card.release_line)?;
                        if !card.link.is_empty() {
                            self.write_link(out, &card.link_label, &card.link)?;
                        }
                    }
                }
                CardGridViewModel::Empty { message } | CardGridViewModel::Error { message } => {
                    writeln!(out, "{}", message)?;
                }
                CardGridViewModel::Skeleton { .. } => {}
            },
        }
        Ok(())
    }

    pub fn render_detail(&self, out: &mut impl Write, item: &Item) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(item)?)?;
            }
            OutputFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(out);
                wtr.write_record(ITEM_CSV_HEADER)?;
                write_item_record(&mut wtr, item)?;
                wtr.flush()?;
            }
            OutputFormat::Plain => self.write_modal(out, &present_modal(item))?,
        }
        Ok(())
    }

    /// Text bars sized to `width` columns
    pub fn render_chart(
        &self,
        out: &mut impl Write,
        chart: &ChartViewModel,
        width: usize,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(chart)?)?;
            }
            OutputFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(out);
                wtr.write_record(["label", "value"])?;
                for bar in &chart.bars {
                    wtr.write_record([bar.label.as_str(), bar.value_text.as_str()])?;
                }
                wtr.flush()?;
            }
            OutputFormat::Plain => {
                self.write_heading(out, &chart.title)?;
                for line in chart_lines(chart, width) {
                    if self.color {
                        writeln!(out, "{} │{} {}", line.label, line.bar.magenta(), line.value)?;
                    } else {
                        writeln!(out, "{} │{} {}", line.label, line.bar, line.value)?;
                    }
                }
                if chart.show_legend {
                    writeln!(out, "{}", chart.legend)?;
                }
            }
        }
        Ok(())
    }

    fn write_modal(&self, out: &mut impl Write, modal: &ModalViewModel) -> Result<()> {
        self.write_heading(out, &modal.title)?;
        if !modal.image_url.is_empty() {
            writeln!(out, "  Image: {}", modal.image_url)?;
        }
        writeln!(out, "  {}", modal.release_line)?;
        if !modal.description.is_empty() {
            writeln!(out)?;
            writeln!(out, "  {}", modal.description)?;
            writeln!(out)?;
        }
        if !modal.link.is_empty() {
            self.write_link(out, &modal.link_label, &modal.link)?;
        }
        Ok(())
    }

    fn write_heading(&self, out: &mut impl Write, title: &str) -> Result<()> {
        if self.color {
            writeln!(out, "{}", title.bold())?;
        } else {
            writeln!(out, "{}", title)?;
        }
        Ok(())
    }

    fn write_link(&self, out: &mut impl Write, label: &str, link: &str) -> Result<()> {
        if self.color {
            writeln!(out, "  {}: {}", label, link.cyan().underline())?;
        } else {
            writeln!(out, "  {}: {}", label, link)?;
        }
        Ok(())
    }
}

fn write_item_record<W: Write>(wtr: &mut csv::Writer<W>, item: &Item) -> Result<()> {
    wtr.write_record([
        item.name.as_str(),
        item.description.as_str(),
        item.release_year
            .map(|y| y.to_string())
            .as_deref()
            .unwrap_or(""),
        item.image_url.as_str(),
        item.link.as_str(),
        &item.popularity.to_string(),
    ])?;
    Ok(())
}

struct ChartLine {
    label: String,
    bar: String,
    value: String,
}

/// Pad labels and values to common widths and scale bars into what is left
fn chart_lines(chart: &ChartViewModel, width: usize) -> Vec<ChartLine> {
    let labels: Vec<String> = chart
        .bars
        .iter()
        .map(|bar| truncate_text(&bar.label, MAX_LABEL_WIDTH))
        .collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let value_width = chart
        .bars
        .iter()
        .map(|bar| bar.value_text.chars().count())
        .max()
        .unwrap_or(0);

    // "label │bar value"
    let bar_width = width.saturating_sub(label_width + value_width + 3).max(1);

    chart
        .bars
        .iter()
        .zip(labels)
        .map(|(bar, label)| {
            let len = if chart.axis_max > 0.0 {
                ((bar.value.max(0.0) / chart.axis_max) * bar_width as f64).round() as usize
            } else {
                0
            };
            ChartLine {
                label: format!("{:<label_width$}", label),
                bar: format!("{:<bar_width$}", "█".repeat(len.min(bar_width))),
                value: format!("{:>value_width$}", bar.value_text),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_chart;
    use langcat_engine::popularity_chart;
    use langcat_types::Catalog;

    fn sample() -> Vec<Item> {
        vec![
            Item::new("Go", "systems", 10.0)
                .with_release_year(2009)
                .with_link("https://go.dev"),
            Item::new("Rust", "safe systems", 20.0).with_release_year(2015),
        ]
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_items() {
        let renderer = ConsoleRenderer::new(OutputFormat::Plain, false);
        let text = render(|out| renderer.render_items(out, &sample()));

        insta::assert_snapshot!(text, @r"
        Go
          systems
          Release year: 2009
          Learn more: https://go.dev

        Rust
          safe systems
          Release year: 2015
        ");
    }

    #[test]
    fn test_plain_empty_items() {
        let renderer = ConsoleRenderer::new(OutputFormat::Plain, false);
        let text = render(|out| renderer.render_items(out, &[]));
        assert_eq!(text, "No results found.\n");
    }

    #[test]
    fn test_csv_items() {
        let renderer = ConsoleRenderer::new(OutputFormat::Csv, false);
        let text = render(|out| renderer.render_items(out, &sample()));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "name,description,releaseYear,imageUrl,link,popularity"
        );
        assert_eq!(lines[1], "Go,systems,2009,,https://go.dev,10");
        assert_eq!(lines[2], "Rust,safe systems,2015,,,20");
    }

    #[test]
    fn test_json_detail_uses_camel_case() {
        let renderer = ConsoleRenderer::new(OutputFormat::Json, false);
        let text = render(|out| renderer.render_detail(out, &sample()[1]));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["name"], "Rust");
        assert_eq!(value["releaseYear"], 2015);
    }

    #[test]
    fn test_plain_detail_shows_documentation_link() {
        let renderer = ConsoleRenderer::new(OutputFormat::Plain, false);
        let text = render(|out| renderer.render_detail(out, &sample()[0]));

        assert!(text.starts_with("Go\n"));
        assert!(text.contains("Official documentation: https://go.dev"));
    }

    #[test]
    fn test_plain_chart_scales_bars() {
        let renderer = ConsoleRenderer::new(OutputFormat::Plain, false);
        let chart = present_chart(&popularity_chart(&Catalog::new(sample())));
        // label 4 + value 2 + 3 separators leaves 10 columns of bar
        let text = render(|out| renderer.render_chart(out, &chart, 19));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Popularity");
        assert_eq!(lines[1], "Rust │██████████ 20");
        assert_eq!(lines[2], "Go   │█████      10");
    }

    #[test]
    fn test_chart_lines_with_zero_axis() {
        let chart = present_chart(&popularity_chart(&Catalog::new(vec![Item::new(
            "Nil", "", 0.0,
        )])));
        let lines = chart_lines(&chart, 20);
        assert_eq!(lines[0].bar.trim(), "");
    }
}

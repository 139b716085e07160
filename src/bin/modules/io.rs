use super::cli::OutputFormat;
use super::error::CliError;
use elemtab::ElementRecord;
use prettytable::*;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

pub fn get_writer(output_path: &Option<PathBuf>) -> Result<Box<dyn Write>, CliError> {
    match output_path {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| CliError::Io {
                path: path.clone(),
                source: e,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

pub fn write_records(
    mut writer: Box<dyn Write>,
    records: &[(usize, &ElementRecord)],
    format: &OutputFormat,
    precision: usize,
    source_name: &str,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Pretty => write_pretty_table(&mut writer, records, precision, source_name),
        OutputFormat::Csv => write_csv(&mut writer, records, precision),
        OutputFormat::Json => write_json(&mut writer, records, precision),
    }
}

fn write_pretty_table(
    writer: &mut dyn Write,
    records: &[(usize, &ElementRecord)],
    precision: usize,
    source_name: &str,
) -> Result<(), CliError> {
    let box_format = format::FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(
            &[format::LinePosition::Top],
            format::LineSeparator::new('─', '┬', '╭', '╮'),
        )
        .separators(
            &[format::LinePosition::Title],
            format::LineSeparator::new('═', '╪', '╞', '╡'),
        )
        .separators(
            &[format::LinePosition::Bottom],
            format::LineSeparator::new('─', '┴', '╰', '╯'),
        )
        .padding(1, 1)
        .build();

    let mut summary_table = Table::new();
    summary_table.set_format(box_format);
    summary_table.add_row(row![b->"Source Table:", source_name]);
    summary_table.add_row(row![b->"Elements Listed:", records.len()]);
    summary_table.print(writer)?;
    writeln!(writer)?;

    let mut data_table = Table::new();
    data_table.set_format(box_format);
    data_table.set_titles(row![
        bc->"Index", bc->"Symbol", bc->"Radius",
        bc->"R", bc->"G", bc->"B",
        bc->"E1", bc->"E2", bc->"E3"
    ]);

    for &(index, record) in records {
        let [r, g, b] = record.color.channels();
        let [e1, e2, e3] = record.energy;
        data_table.add_row(row![
            r->index,
            l->record.symbol.trim_end(),
            r->format!("{:.prec$}", record.display_radius, prec = precision),
            r->format!("{:.prec$}", r, prec = precision),
            r->format!("{:.prec$}", g, prec = precision),
            r->format!("{:.prec$}", b, prec = precision),
            r->format!("{:.prec$}", e1, prec = precision),
            r->format!("{:.prec$}", e2, prec = precision),
            r->format!("{:.prec$}", e3, prec = precision)
        ]);
    }

    data_table.print(writer)?;

    Ok(())
}

fn write_csv(
    writer: &mut dyn Write,
    records: &[(usize, &ElementRecord)],
    precision: usize,
) -> Result<(), CliError> {
    writeln!(writer, "index,symbol,radius,r,g,b,e1,e2,e3")?;
    for &(index, record) in records {
        let [r, g, b] = record.color.channels();
        let [e1, e2, e3] = record.energy;
        writeln!(
            writer,
            "{},{},{:.*},{:.*},{:.*},{:.*},{:.*},{:.*},{:.*}",
            index,
            record.symbol.trim_end(),
            precision,
            record.display_radius,
            precision,
            r,
            precision,
            g,
            precision,
            b,
            precision,
            e1,
            precision,
            e2,
            precision,
            e3
        )?;
    }
    Ok(())
}

fn write_json(
    writer: &mut dyn Write,
    records: &[(usize, &ElementRecord)],
    precision: usize,
) -> Result<(), CliError> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"elements\": [")?;
    for (pos, &(index, record)) in records.iter().enumerate() {
        let [r, g, b] = record.color.channels();
        let [e1, e2, e3] = record.energy;
        let comma = if pos < records.len() - 1 { "," } else { "" };
        writeln!(writer, "    {{")?;
        writeln!(writer, "      \"index\": {},", index)?;
        writeln!(writer, "      \"symbol\": \"{}\",", record.symbol.trim_end())?;
        writeln!(
            writer,
            "      \"radius\": {:.*},",
            precision, record.display_radius
        )?;
        writeln!(
            writer,
            "      \"color\": [{:.*}, {:.*}, {:.*}],",
            precision, r, precision, g, precision, b
        )?;
        writeln!(
            writer,
            "      \"energy\": [{:.*}, {:.*}, {:.*}]",
            precision, e1, precision, e2, precision, e3
        )?;
        writeln!(writer, "    }}{}", comma)?;
    }
    writeln!(writer, "  ],")?;
    writeln!(writer, "  \"count\": {}", records.len())?;
    writeln!(writer, "}}")?;
    Ok(())
}

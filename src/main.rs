use std::process;

use anyhow::Result;
use clap::{App, AppSettings};
use log::{debug, info};
use thousands::Separable;

mod history;
mod render;
mod stats;
mod theme;

use theme::Palette;

const BOX_WIDTH: usize = 95;
const BAR_LENGTH: usize = 30;
const ITEM_LABEL_WIDTH: usize = 30;

const TITLE_ART: &str = r#"
*                    *                       *                 *              *

  *  ██████╗██╗     ██╗    ██╗    ██╗██████╗  █████╗ ██████╗ ██████╗ ███████╗██████╗ *
    ██╔════╝██║     ██║    ██║    ██║██╔══██╗██╔══██╗██╔══██╗██╔══██╗██╔════╝██╔══██╗
    ██║     ██║     ██║    ██║ █╗ ██║██████╔╝███████║██████╔╝██████╔╝█████╗  ██║  ██║
    ██║     ██║     ██║    ██║███╗██║██╔══██╗██╔══██║██╔═══╝ ██╔═══╝ ██╔══╝  ██║  ██║
    ╚██████╗███████╗██║    ╚███╔███╔╝██║  ██║██║  ██║██║     ██║     ███████╗██████╔╝
     ╚═════╝╚══════╝╚═╝     ╚══╝╚══╝ ╚═╝  ╚═╝╚═╝  ╚═╝╚═╝     ╚═╝     ╚══════╝╚═════╝

    *                    *██████╗  ██████╗ ██████╗ ██╗  ██╗
                          ╚════██╗██╔═████╗╚════██╗██║  ██║   *                     *
         *                █████╔╝ ██║██╔██║ █████╔╝███████║
                          ██╔═══╝ ████╔╝██║██╔═══╝ ╚════██║
                          ███████╗╚██████╔╝███████╗     ██║                *
                 *    *   ╚══════╝ ╚═════╝ ╚══════╝     ╚═╝ *
"#;

const TOP_COMMANDS_HEADER: &str = r#"
__________________________________________________________________________________________
------------------------------------------------------------------------------------------
           _____               ___                                    _
          |_   _|___  _ __    / __| ___  _ __   _ __   __ _  _ _   __| | ___
            | | / _ \| '_ \  | (__ / _ \| '  \ | '  \ / _` || ' \ / _` |(_-<
            |_| \___/| .__/   \___|\___/|_|_|_||_|_|_|\__,_||_||_|\__,_|/__/
                     |_|
                        Top 10 most frequently used commands
__________________________________________________________________________________________
------------------------------------------------------------------------------------------
"#;

const TOP_FILES_HEADER: &str = r#"
__________________________________________________________________________________________
------------------------------------------------------------------------------------------
                         _____              ___  _  _
                        |_   _|___  _ __   | __|(_)| | ___  ___
                          | | / _ \| '_ \  | _| | || |/ -_)(_-<
                          |_| \___/| .__/  |_|  |_||_|\___|/__/
                                   |_|
                          Top 10 most frequently accessed files
__________________________________________________________________________________________
------------------------------------------------------------------------------------------
"#;

fn push_ranked_section(
    report: &mut Vec<String>,
    header: &str,
    items: &[(String, f64)],
    color: &str,
    palette: &Palette,
) {
    report.push(header.trim().to_string());
    for (i, (item, percentage)) in items.iter().enumerate() {
        let bar = render::create_scaled_bar(*percentage, BAR_LENGTH, palette);
        let label = render::pad_text(
            &format!("{}. {}", i + 1, item),
            color,
            ITEM_LABEL_WIDTH,
            palette,
        );
        report.push(format!("{:>50} | {} | {:5.1}%", label, bar, percentage));
    }
}

fn run() -> Result<()> {
    let palette = Palette::new();

    let history_file = history::history_file_path()?;
    if !history_file.exists() {
        println!(
            "{}Warning: .bash_history file not found.{}",
            palette.theme, palette.reset
        );
        process::exit(1);
    }

    let lines = history::load_history(&history_file)?;
    info!(
        "analyzing {} history lines from {}",
        lines.len(),
        history_file.display()
    );

    let commands = history::extract_commands(&lines);
    let file_tokens = history::extract_file_tokens(&lines);
    let (total_commands, command_percentages) = stats::count_item_frequencies(&commands);
    let (total_files, file_percentages) = stats::count_item_frequencies(&file_tokens);
    debug!("{} commands, {} file tokens", total_commands, total_files);

    let mut report: Vec<String> = Vec::new();
    report.push(TITLE_ART.trim().to_string());
    push_ranked_section(
        &mut report,
        TOP_COMMANDS_HEADER,
        &command_percentages,
        &palette.command,
        &palette,
    );
    push_ranked_section(
        &mut report,
        TOP_FILES_HEADER,
        &file_percentages,
        &palette.file,
        &palette,
    );
    report.push(format!(
        "\nTotal commands: {}\nTotal files found: {}",
        total_commands.separate_with_commas(),
        total_files.separate_with_commas()
    ));

    let outer_box = render::create_outer_box(&report, BOX_WIDTH, &palette);
    println!("{}", outer_box.join("\n"));
    Ok(())
}

fn main() {
    env_logger::init();

    let _matches = App::new("cli-wrapped")
        .version("0.1")
        .about("Summarizes your shell history: top commands and files, ranked")
        .setting(AppSettings::ColoredHelp)
        .get_matches();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

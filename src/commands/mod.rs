pub(crate) mod new;
pub(crate) mod normalize;
pub(crate) mod theme;

use bn_cli::render::{Line, Stream};

use crate::theme::Theme;

pub(crate) fn print_lines(lines: &[Line], theme: Theme) {
    for line in lines {
        let styled = theme.style(line.tone).apply_to(&line.text);
        match line.stream {
            Stream::Stdout => println!("{styled}"),
            Stream::Stderr => eprintln!("{styled}"),
        }
    }
}

//! Scripted editor session without a window.
//!
//! Clicks out a pentagon, drags one corner inwards, saves and restores the
//! state, and prints the diagnostics columns after each step.
//!
//! ```text
//! cargo run --example headless
//! RUST_LOG=polyedit=trace cargo run --example headless
//! ```

use polyedit::interaction::MouseButton;
use polyedit::{Editor, EditorConfig, Result, Vector};

fn print_report(title: &str, editor: &mut Editor) {
    editor.render_frame();
    println!("== {title}");
    if let Some(report) = editor.diagnostics() {
        let left = report.left_column();
        let right = report.right_column();
        for (l, r) in left.lines().zip(right.lines()) {
            println!("{l:<14}{r}");
        }
    }
}

fn click(editor: &mut Editor, x: f64, y: f64) {
    editor.mouse_down(MouseButton::Primary, Vector::new(x, y));
    editor.mouse_up(MouseButton::Primary, Vector::new(x, y));
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for polyedit.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("polyedit=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut editor = Editor::new(EditorConfig::default().with_name_seed(1))?;
    for (x, y) in [
        (300.0, 100.0),
        (450.0, 210.0),
        (390.0, 380.0),
        (210.0, 380.0),
        (150.0, 210.0),
    ] {
        click(&mut editor, x, y);
    }
    print_report("pentagon", &mut editor);
    editor.push_state();

    editor.mouse_down(MouseButton::Primary, Vector::new(300.0, 100.0));
    editor.render_frame();
    editor.mouse_move(Vector::new(300.0, 300.0));
    editor.mouse_up(MouseButton::Primary, Vector::new(300.0, 300.0));
    print_report("dragged corner", &mut editor);

    editor.pop_state();
    print_report("restored", &mut editor);
    Ok(())
}

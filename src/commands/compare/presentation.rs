use crate::core::compose_version::ComposeVersion;
use crate::core::diff::PackageDiff;
use colored::Colorize;

/// Human-readable report, one section per change category
pub(super) fn render_text(
    diff: &PackageDiff,
    arch: &str,
    from: &ComposeVersion,
    to: &ComposeVersion,
) -> String {
    let mut lines = vec![
        format!(
            "======= {} package diff from {} to {} =======",
            arch, from, to
        )
        .bold()
        .to_string(),
    ];

    lines.push("==== Packages REMOVED".cyan().to_string());
    for pkg in &diff.removed {
        lines.push(format!(
            "     {} {}  ({})",
            pkg.name,
            "REMOVED".red(),
            pkg.version
        ));
    }

    lines.push("==== Packages ADDED".cyan().to_string());
    for pkg in &diff.added {
        lines.push(format!(
            "     {} {}  ({})",
            pkg.name,
            "ADDED".green(),
            pkg.version
        ));
    }

    lines.push("==== Packages CHANGED".cyan().to_string());
    for pkg in &diff.changed {
        lines.push(format!(
            "     {} {}  ({} -> {})",
            pkg.name,
            "CHANGED".yellow(),
            pkg.version_from,
            pkg.version_to
        ));
    }

    lines.push(String::new());
    if diff.is_empty() {
        lines.push("No package changes".bright_black().to_string());
    } else {
        lines.push(
            format!(
                "Summary: {} removed, {} added, {} changed",
                diff.removed.len(),
                diff.added.len(),
                diff.changed.len()
            )
            .bright_black()
            .to_string(),
        );
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

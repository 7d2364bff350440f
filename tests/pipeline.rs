use std::fs;
use std::path::Path;

use querydocs::{OutputFormat, RenderParams, generate, parse_docs};

fn write_doc(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

fn sample_docs(dir: &Path) {
    write_doc(
        dir,
        "clientlist.txt",
        "Usage: clientlist [-uid] [-away] [-voice]\n\
         \n\
         Displays a list of clients online on a virtual server.\n\
         \n\
         Example:\n\
         \x20  clientlist -away\n\
         \x20  clid=5 cid=7 client_nickname=ScP\n\
         \x20  error id=0 msg=ok\n",
    );
    write_doc(
        dir,
        "banadd.txt",
        "Usage: banadd [ip={regexp}] [name={regexp}] [time={timeInSeconds}]\n\
         \n\
         Adds a new ban rule on the selected virtual server.\n",
    );
    write_doc(dir, "broken.txt", "This file has no usage block.\n");
    write_doc(dir, "notes.md", "Usage: ignored\n\nNot matched by the glob.\n");
}

#[test]
fn parse_docs_skips_malformed_files() {
    let dir = tempfile::tempdir().unwrap();
    sample_docs(dir.path());

    let report = parse_docs(&format!("{}/*.txt", dir.path().display())).unwrap();
    assert_eq!(report.parsed, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].0.ends_with("broken.txt"));

    let names: Vec<_> = report.commands.keys().cloned().collect();
    assert_eq!(names, vec!["banadd", "clientlist"]);
    assert_eq!(
        report.commands["banadd"].arguments,
        "[ip={regexp}] [name={regexp}] [time={timeInSeconds}]"
    );
    assert_eq!(report.commands["clientlist"].example.len(), 3);
}

#[test]
fn later_doc_wins_on_duplicate_command() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(dir.path(), "a.txt", "Usage: login a\n\nFirst.\n");
    write_doc(dir.path(), "b.txt", "Usage: login b\n\nSecond.\n");

    let report = parse_docs(&format!("{}/*.txt", dir.path().display())).unwrap();
    assert_eq!(report.parsed, 2);
    assert_eq!(report.commands.len(), 1);
    assert_eq!(report.commands["login"].description, "Second.");
}

#[test]
fn generate_writes_html_listing() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    fs::create_dir(&docs).unwrap();
    sample_docs(&docs);

    let output = dir.path().join("site").join("query.html");
    let params = RenderParams {
        pattern: Some(format!("{}/*.txt", docs.display())),
        output: Some(output.clone()),
        title: "ServerQuery".to_string(),
        ..RenderParams::default()
    };

    let report = generate(&params).unwrap();
    assert_eq!(report.commands.len(), 2);

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<title>ServerQuery</title>"));
    assert!(html.contains("href=\"#cmd-banadd\""));
    assert!(html.find("id=\"cmd-banadd\"").unwrap() < html.find("id=\"cmd-clientlist\"").unwrap());
    assert!(html.contains("Adds a new ban rule on the selected virtual server."));
    assert!(html.contains("clientlist -away"));
    assert!(!html.contains("broken"));
}

#[test]
fn generate_writes_json_listing() {
    let dir = tempfile::tempdir().unwrap();
    sample_docs(dir.path());

    let output = dir.path().join("query.json");
    let params = RenderParams {
        pattern: Some(format!("{}/*.txt", dir.path().display())),
        output: Some(output.clone()),
        format: OutputFormat::Json,
        ..RenderParams::default()
    };
    generate(&params).unwrap();

    let records: Vec<querydocs::QueryCommand> =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "banadd");
    assert!(records[0].example.is_empty());
    assert_eq!(records[1].signature(), "clientlist [-uid] [-away] [-voice]");
}

#[test]
fn empty_match_still_renders_a_page() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("query.html");
    let params = RenderParams {
        pattern: Some(format!("{}/*.txt", dir.path().display())),
        output: Some(output.clone()),
        ..RenderParams::default()
    };

    let report = generate(&params).unwrap();
    assert_eq!(report.parsed, 0);
    assert!(fs::read_to_string(&output).unwrap().contains("0 commands"));
}

#[test]
fn invalid_pattern_is_fatal() {
    let params = RenderParams {
        pattern: Some("docs/[*.txt".to_string()),
        ..RenderParams::default()
    };
    assert!(matches!(
        generate(&params),
        Err(querydocs::Error::Pattern { .. })
    ));
}

#[test]
fn generate_renders_user_template() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    fs::create_dir(&docs).unwrap();
    sample_docs(&docs);

    let template = dir.path().join("listing.html");
    fs::write(
        &template,
        "<title>{{ title }}</title>\n\
         <ul>{% for cmd in commands %}<li>{{ cmd.name }}|{{ cmd.arguments }}|{% if cmd.example %}{{ cmd.example | length }}{% else %}0{% endif %}</li>{% endfor %}</ul>",
    )
    .unwrap();

    let output = dir.path().join("out.html");
    let params = RenderParams {
        pattern: Some(format!("{}/*.txt", docs.display())),
        output: Some(output.clone()),
        title: "Custom".to_string(),
        template: Some(template),
        ..RenderParams::default()
    };
    generate(&params).unwrap();

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(
        html,
        "<title>Custom</title>\n\
         <ul><li>banadd|[ip={regexp}] [name={regexp}] [time={timeInSeconds}]|0</li>\
         <li>clientlist|[-uid] [-away] [-voice]|3</li></ul>"
    );
}

#[test]
fn json_output_ignores_template() {
    let dir = tempfile::tempdir().unwrap();
    sample_docs(dir.path());

    let output = dir.path().join("query.json");
    let params = RenderParams {
        pattern: Some(format!("{}/*.txt", dir.path().display())),
        output: Some(output.clone()),
        format: OutputFormat::Json,
        template: Some(dir.path().join("missing.html")),
        ..RenderParams::default()
    };
    generate(&params).unwrap();

    let records: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn parse_docs_accepts_byte_order_mark() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(
        dir.path(),
        "version.txt",
        "\u{feff}Usage: version\n\nDisplays the server version.\n",
    );

    let report = parse_docs(&format!("{}/*.txt", dir.path().display())).unwrap();
    assert_eq!(report.skipped, 0);
    assert_eq!(report.commands["version"].description, "Displays the server version.");
}

#[cfg(unix)]
#[test]
fn unreadable_directories_are_counted_as_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let open = dir.path().join("open");
    let locked = dir.path().join("locked");
    fs::create_dir(&open).unwrap();
    fs::create_dir(&locked).unwrap();
    write_doc(&open, "quit.txt", "Usage: quit\n\nCloses the connection.\n");
    write_doc(&locked, "login.txt", "Usage: login\n\nAuthenticates.\n");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can list the directory anyway; nothing to observe then.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let report = parse_docs(&format!("{}/*/*.txt", dir.path().display()));
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    let report = report.unwrap();

    assert_eq!(report.parsed, 1);
    assert_eq!(report.skipped, 1);
    assert!(report.failures[0].0.ends_with("locked"));
    assert!(report.commands.contains_key("quit"));
}

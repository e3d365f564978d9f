/*!
 * Integration tests for the script study workflow
 */

use anyhow::Result;

use cineglot::app_config::Config;
use cineglot::app_controller::Controller;
use cineglot::study_guide::parse_response;
use cineglot::vocab::{VocabItem, group_by_line};
use crate::common;

/// Test the full flow: load vocabulary and script, find unknown words,
/// capture them with context and build a study-guide request
#[test]
fn test_script_workflow_withFullProcess_shouldSucceed() -> Result<()> {
    common::init_test_logger();
    let temp_dir = common::create_temp_dir()?;
    let script_path = common::create_test_script(temp_dir.path(), "movie.ass")?;
    let vocab_path = common::create_test_vocab(
        temp_dir.path(),
        "known.txt",
        &["we", "give", "up", "until", "the", "very", "end", "where", "be", "you", "go", "she", "smile"],
    )?;

    // 1. Controller with vocabulary
    let config = Config { known_words_path: Some(vocab_path), ..Config::default() };
    let controller = Controller::with_config(config)?;

    // 2. Parse the script
    let script = controller.load_script(&script_path)?;
    assert_eq!(script.len(), 4);

    // 3. Find unknown words
    let unknown = controller.unknown_words(&script.lines);
    let flagged: Vec<(usize, usize)> = unknown
        .iter()
        .flat_map(|u| u.words.iter().map(move |(w, _)| (u.line_index, *w)))
        .collect();
    assert_eq!(flagged, vec![(0, 1), (3, 0)]);

    // 4. Capture them
    let items: Vec<VocabItem> = flagged
        .iter()
        .filter_map(|&(line, word)| controller.capture(&script.lines, line, word))
        .collect();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].word, "never");
    assert_eq!(items[0].context, "We never gave up until the very end.");
    assert_eq!(items[1].context, "Running, she smiled.");
    assert_eq!(group_by_line(&items).len(), 2);

    // 5. Build the request and decode a response
    let request = controller.study_guide_request(&items).expect("request for captured words");
    assert!(request.prompt.contains("I am learning English"));
    assert!(request.prompt.contains("never, Running"));

    let guide = parse_response("```json\n[{\"word\":\"never\",\"definition\":\"not ever\",\"example\":\"I never swim.\"},{\"word\":\"running\"}]\n```");
    assert_eq!(guide.len(), 2);
    assert_eq!(guide[1].example, "");

    Ok(())
}

/// Test that disabling auto expansion keeps single-line context
#[test]
fn test_script_workflow_withoutAutoExpand_shouldUseSingleLine() -> Result<()> {
    common::init_test_logger();
    let temp_dir = common::create_temp_dir()?;
    let script_path = common::create_test_script(temp_dir.path(), "movie.ass")?;

    let mut config = Config::default();
    config.learning.auto_expand_context = false;
    let controller = Controller::with_config(config)?;

    let script = controller.load_script(&script_path)?;
    let item = controller.capture(&script.lines, 0, 1).expect("word at line 0");

    assert_eq!(item.context, "We never gave up");
    assert_eq!(item.translation, "\u{6211}\u{4EEC}\u{4ECE}\u{672A}\u{653E}\u{5F03}");

    // Explicit context lookups still expand
    assert_eq!(controller.context_for(&script.lines, 0).target_text, "We never gave up until the very end.");
    Ok(())
}

/// Test that the configured depth bounds expansion
#[test]
fn test_script_workflow_withDepthOne_shouldLimitWindow() -> Result<()> {
    common::init_test_logger();
    let content = "[Events]\n\
        Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,one\n\
        Dialogue: 0,0:00:02.00,0:00:03.00,Default,,0,0,0,,two\n\
        Dialogue: 0,0:00:03.00,0:00:04.00,Default,,0,0,0,,three\n\
        Dialogue: 0,0:00:04.00,0:00:05.00,Default,,0,0,0,,four.\n";
    let temp_dir = common::create_temp_dir()?;
    let script_path = common::create_test_file(temp_dir.path(), "count.ass", content)?;

    let mut config = Config::default();
    config.learning.max_context_depth = 1;
    let controller = Controller::with_config(config)?;

    let script = controller.load_script(&script_path)?;
    let window = controller.window_for(&script.lines, 1).expect("line 1 exists");

    assert_eq!(window.span(), (0, 2));
    assert_eq!(controller.context_for(&script.lines, 1).target_text, "one two three");
    assert!(controller.window_for(&script.lines, 4).is_none());
    Ok(())
}

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions};

use super::{PageElements, SUBMITTED_LABEL};
use crate::grade::{GradeReport, Verdict};
use crate::render::feedback_id;

/// Applies a grade report to the live page: reveals every feedback region,
/// fills in the counts, shows the results container, and permanently locks
/// the grading control and every choice input.
pub(crate) fn apply(
    page: &PageElements,
    report: &GradeReport,
    inputs: &[HtmlInputElement],
) -> Result<(), JsValue> {
    for (index, verdict) in report.verdicts.iter().enumerate() {
        let feedback = match page.document.get_element_by_id(&feedback_id(index)) {
            Some(element) => element.dyn_into::<HtmlElement>()?,
            None => continue,
        };
        feedback.set_text_content(Some(&verdict.feedback()));
        feedback.style().set_property("color", verdict_color(verdict))?;
        feedback.style().set_property("display", "block")?;
    }

    page.score
        .set_text_content(Some(&report.correct.to_string()));
    page.correct_count
        .set_text_content(Some(&report.correct.to_string()));
    page.incorrect_count
        .set_text_content(Some(&report.incorrect.to_string()));

    page.result_container.style().set_property("display", "block")?;
    let scroll = ScrollIntoViewOptions::new();
    scroll.set_behavior(ScrollBehavior::Smooth);
    page.result_container
        .scroll_into_view_with_scroll_into_view_options(&scroll);

    page.submit_button.set_disabled(true);
    page.submit_button.set_text_content(Some(SUBMITTED_LABEL));

    for input in inputs {
        input.set_disabled(true);
    }

    Ok(())
}

fn verdict_color(verdict: &Verdict) -> &'static str {
    match verdict {
        Verdict::Correct => "green",
        Verdict::Incorrect { .. } => "red",
        Verdict::Skipped { .. } => "orange",
    }
}

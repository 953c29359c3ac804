//! Browser-facing layer.
//!
//! Looks up the hosting page's fixed-id elements, renders the question
//! collection into the container, and wires the selection and submit
//! handlers. Everything here is `wasm32`-only glue over the pure core.

mod questions;
mod results;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement};

use crate::app::App;
use crate::data::parse_questions;

const CONTAINER_ID: &str = "mcq-container";
const SUBMIT_BUTTON_ID: &str = "submit-btn";
const RESULT_CONTAINER_ID: &str = "result-container";
const SCORE_ID: &str = "score";
const TOTAL_QUESTIONS_ID: &str = "total-questions";
const CORRECT_COUNT_ID: &str = "correct-count";
const INCORRECT_COUNT_ID: &str = "incorrect-count";
const DATA_SCRIPT_ID: &str = "mcq-data";

const SUBMITTED_LABEL: &str = "Test Submitted";

/// Elements the hosting page must provide, looked up once at mount time.
pub(crate) struct PageElements {
    document: Document,
    container: Element,
    submit_button: HtmlButtonElement,
    result_container: HtmlElement,
    score: Element,
    total_questions: Element,
    correct_count: Element,
    incorrect_count: Element,
}

impl PageElements {
    fn find(document: Document) -> Result<Self, JsValue> {
        let container = require(&document, CONTAINER_ID)?;
        let submit_button = require_as::<HtmlButtonElement>(&document, SUBMIT_BUTTON_ID)?;
        let result_container = require_as::<HtmlElement>(&document, RESULT_CONTAINER_ID)?;
        let score = require(&document, SCORE_ID)?;
        let total_questions = require(&document, TOTAL_QUESTIONS_ID)?;
        let correct_count = require(&document, CORRECT_COUNT_ID)?;
        let incorrect_count = require(&document, INCORRECT_COUNT_ID)?;

        Ok(Self {
            document,
            container,
            submit_button,
            result_container,
            score,
            total_questions,
            correct_count,
            incorrect_count,
        })
    }
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window available"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document available"))
}

fn require(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing required element #{}", id)))
}

fn require_as<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    require(document, id)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not the expected element type", id)))
}

/// Module entry point. Mounts immediately when the document is already
/// parsed, otherwise defers to `DOMContentLoaded`.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = document()?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::<dyn FnMut()>::new(move || {
            if let Err(e) = mount() {
                console::error_1(&e);
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
        return Ok(());
    }

    mount()
}

/// Renders the embedded payload into the hosting page and arms the grading
/// control. Payload problems do not fail the page: an absent payload warns
/// and leaves the control inert, a malformed one replaces the question area
/// with an error message, an empty one shows an informational message.
pub fn mount() -> Result<(), JsValue> {
    let page = PageElements::find(document()?)?;

    let data_script = match page.document.get_element_by_id(DATA_SCRIPT_ID) {
        Some(element) => element,
        None => {
            console::warn_1(&"No MCQ data script found on page.".into());
            page.submit_button.set_disabled(true);
            return Ok(());
        }
    };

    let payload = data_script.text_content().unwrap_or_default();
    let questions = match parse_questions(&payload) {
        Ok(questions) => questions,
        Err(e) => {
            console::error_1(&format!("Failed to parse MCQ JSON data: {}", e).into());
            page.container
                .set_inner_html("<p class=\"text-red-500\">Error loading questions.</p>");
            page.submit_button.set_disabled(true);
            return Ok(());
        }
    };

    if questions.is_empty() {
        page.container
            .set_inner_html("<p>No questions available for this test.</p>");
        page.submit_button.set_disabled(true);
        return Ok(());
    }

    page.total_questions
        .set_text_content(Some(&questions.len().to_string()));

    let app = Rc::new(RefCell::new(App::with_questions(questions)));
    let inputs = questions::attach(&page, &app)?;
    app.borrow_mut().mark_rendered();

    wire_submit(page, app, inputs)
}

fn wire_submit(
    page: PageElements,
    app: Rc<RefCell<App>>,
    inputs: Vec<HtmlInputElement>,
) -> Result<(), JsValue> {
    let button = page.submit_button.clone();

    let on_click = Closure::<dyn FnMut()>::new(move || {
        let report = match app.borrow_mut().submit() {
            Some(report) => report,
            None => return,
        };
        if let Err(e) = results::apply(&page, &report, &inputs) {
            console::error_1(&e);
        }
    });
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(())
}

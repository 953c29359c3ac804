use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

use super::PageElements;
use crate::app::App;
use crate::render::build_cards;

/// Builds one block per question card and appends them, in collection order,
/// to the hosting container. Each radio input gets a `change` handler that
/// records the selection in the shared session. Returns every input so the
/// submit pass can lock them.
pub(crate) fn attach(
    page: &PageElements,
    app: &Rc<RefCell<App>>,
) -> Result<Vec<HtmlInputElement>, JsValue> {
    let document = &page.document;
    let cards = build_cards(app.borrow().questions());
    let mut inputs = Vec::new();

    for (question_index, card) in cards.iter().enumerate() {
        let block = document.create_element("div")?;
        block.set_class_name("question-block");

        let heading = document.create_element("h3")?;
        heading.set_text_content(Some(&card.heading));
        block.append_child(&heading)?;

        let options = document.create_element("div")?;
        for choice in &card.choices {
            let wrapper = document.create_element("div")?;
            let label = document.create_element("label")?;

            let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
            input.set_type("radio");
            input.set_name(&card.group);
            input.set_value(&choice.value.to_string());

            let chosen = choice.value;
            let handler_app = Rc::clone(app);
            let on_change = Closure::<dyn FnMut()>::new(move || {
                handler_app.borrow_mut().select_option(question_index, chosen);
            });
            input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
            on_change.forget();

            label.append_child(&input)?;
            label.append_child(&document.create_text_node(&choice.label))?;
            wrapper.append_child(&label)?;
            options.append_child(&wrapper)?;
            inputs.push(input);
        }
        block.append_child(&options)?;

        let feedback: HtmlElement = document.create_element("div")?.dyn_into()?;
        feedback.set_id(&card.feedback_id);
        feedback.style().set_property("display", "none")?;
        block.append_child(&feedback)?;

        page.container.append_child(&block)?;
    }

    Ok(inputs)
}

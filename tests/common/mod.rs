//! Shared helpers for integration tests
#![allow(dead_code)]

use editable::{
    update, Cmd, EditorModel, ElementId, ElementKind, Msg, RegionEvent, RegionId, RegionMsg,
    Settings,
};

/// A started model with one bound paragraph region
pub fn model_with_region(content: &str) -> (EditorModel, RegionId, ElementId) {
    let mut model = EditorModel::started(Settings::default());
    let element = model
        .dom
        .create_with_content(ElementKind::Paragraph, None, content);
    update(&mut model, Msg::bind(element));
    let region = model.region_for(element).unwrap();
    (model, region, element)
}

/// Bind another paragraph region to an existing model
pub fn bind_region(model: &mut EditorModel, content: &str) -> (RegionId, ElementId) {
    let element = model
        .dom
        .create_with_content(ElementKind::Paragraph, None, content);
    update(model, Msg::bind(element));
    (model.region_for(element).unwrap(), element)
}

/// Activate a region through the update loop
pub fn activate(model: &mut EditorModel, region: RegionId) -> Option<Cmd> {
    update(
        model,
        Msg::Region(RegionMsg::Activate {
            region,
            source: None,
        }),
    )
}

/// Append text to an element's content, simulating the host's own edit
pub fn type_text(model: &mut EditorModel, element: ElementId, text: &str) {
    model
        .dom
        .get_mut(element)
        .unwrap()
        .content
        .push_str(text);
}

/// The region id announced by a Created notification in `cmd`
pub fn created_region(cmd: &Cmd) -> Option<RegionId> {
    cmd.notifications().iter().find_map(|n| match n.event {
        RegionEvent::Created { region } => Some(region),
        _ => None,
    })
}

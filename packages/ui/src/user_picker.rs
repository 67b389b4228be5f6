use dioxus::prelude::*;
use feed::render::PickerOption;

/// Dropdown of loaded users, labelled by handle. Emits the raw option value.
#[component]
pub fn UserPicker(options: Vec<PickerOption>, on_select: EventHandler<String>) -> Element {
    rsx! {
        select {
            id: "user-select",
            class: "user-select",
            onchange: move |evt: FormEvent| on_select.call(evt.value()),
            for opt in options {
                option {
                    key: "{opt.value}",
                    value: "{opt.value}",
                    selected: opt.selected,
                    "{opt.label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness(options: Vec<PickerOption>) -> Element {
        rsx! {
            UserPicker { options, on_select: move |_| {} }
        }
    }

    fn render(options: Vec<PickerOption>) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { options });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn option(id: i64, handle: &str, selected: bool) -> PickerOption {
        PickerOption {
            value: id.to_string(),
            label: format!("@{handle}"),
            selected,
        }
    }

    /// The markup of each `<option>`, in document order.
    fn options_of(html: &str) -> Vec<&str> {
        html.split("<option").skip(1).collect()
    }

    #[test]
    fn test_options_carry_id_and_handle() {
        let html = render(vec![option(1, "Bret", false), option(2, "Antonette", true)]);
        assert!(html.contains(r#"id="user-select""#));

        let options = options_of(&html);
        assert_eq!(options.len(), 2);
        assert!(options[0].contains(r#"value="1""#));
        assert!(options[0].contains("@Bret"));
        assert!(!options[0].contains("selected"));
        assert!(options[1].contains(r#"value="2""#));
        assert!(options[1].contains("@Antonette"));
        assert!(options[1].contains("selected"));
    }

    #[test]
    fn test_no_options_renders_empty_select() {
        let html = render(Vec::new());
        assert!(html.contains("<select"));
        assert!(options_of(&html).is_empty());
    }
}

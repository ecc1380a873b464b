use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Clone, Copy, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [FaqEntry; 6] = [
    FaqEntry {
        question: "What are your fees?",
        answer: "Our fees vary depending on the service provided. Please contact us for details.",
    },
    FaqEntry {
        question: "Do you take insurance?",
        answer: "Yes, we accept most major insurance plans. Please verify with your provider.",
    },
    FaqEntry {
        question: "Do you provide online counseling?",
        answer: "Yes, we offer secure video counseling sessions.",
    },
    FaqEntry {
        question: "What are your office hours?",
        answer: "Monday to Friday: 9am – 6pm, Saturday: 10am – 2pm.",
    },
    FaqEntry {
        question: "What geographic areas do you serve?",
        answer: "We serve clients across the state and offer online sessions nationwide.",
    },
    FaqEntry {
        question: "What services do you offer?",
        answer: "We offer individual, couples, and family counseling services.",
    },
];

/// At most one answer is open. Clicking the open question closes it.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let open_index = use_state(|| None::<usize>);

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let is_open = *open_index == Some(index);
                let onclick = {
                    let open_index = open_index.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        open_index.set(toggle(*open_index, index));
                    })
                };
                html! {
                    <div class="faq-item" key={index}>
                        <button class="faq-question" {onclick}>
                            <span class="question-text">{entry.question}</span>
                            <span class={classes!("chevron", is_open.then(|| "rotated"))}>{"⌄"}</span>
                        </button>
                        if is_open {
                            <p class="faq-answer">{entry.answer}</p>
                        }
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_clicked_item() {
        assert_eq!(toggle(None, 2), Some(2));
    }

    #[test]
    fn clicking_open_item_closes_it() {
        assert_eq!(toggle(Some(2), 2), None);
    }

    #[test]
    fn opening_another_item_closes_the_first() {
        assert_eq!(toggle(Some(0), 4), Some(4));
    }

    #[test]
    fn six_questions() {
        assert_eq!(FAQS.len(), 6);
        assert!(FAQS.iter().all(|faq| faq.question.ends_with('?')));
    }
}

use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::use_title;
use web_sys::MouseEvent;

use crate::Route;
use crate::config;
use crate::components::animated_section::{reveal_style, AnimatedSection};
use crate::components::faq::{FaqAccordion, FAQS};
use crate::visibility::{use_visibility, ObserverOverrides, RevealState};

const LOGO_URL: &str = "https://images.squarespace-cdn.com/content/v1/64d3ecd6f85a702f7881b802/450ce2f6-bc20-432a-9e9e-4a48a995b92b/logo-transparent-png.png?format=1500w";
const PORTRAIT_URL: &str = "https://images.squarespace-cdn.com/content/v1/64d3ecd6f85a702f7881b802/e841b9a0-6e90-4af7-89ff-cfb7018239e5/AD8A7645-Edit.jpg";
const OCEAN_URL: &str = "https://images.squarespace-cdn.com/content/v1/64d3ecd6f85a702f7881b802/44c05ca0-453a-453a-811d-c7bc342ee810/pexels-josh-sorenson-386148.jpg";

struct FocusArea {
    title: &'static str,
    image: &'static str,
    alt: &'static str,
    body: &'static str,
    delay: u32,
}

const FOCUS_AREAS: [FocusArea; 3] = [
    FocusArea {
        title: "Therapy for Healthcare Providers and Students",
        image: "https://images.squarespace-cdn.com/content/v1/64d3ecd6f85a702f7881b802/25a4d543-1f55-46b7-ba06-c571a0c2b806/pexels-tima-miroshnichenko-6011667.jpg",
        alt: "Healthcare Providers",
        body: "The care you provide for others may be driving you to seek therapy, whether due to burnout, compassion fatigue, imposter syndrome, people-pleasing tendencies, or perfectionism. Whether you're in pre-professional school, undergoing training, or reflecting on a long career in healthcare, we can address the unique stressors of your professional environment along with any challenges you may be facing in other areas of your life.",
        delay: 100,
    },
    FocusArea {
        title: "Therapy for Trauma and Grief",
        image: "https://images.squarespace-cdn.com/content/v1/64d3ecd6f85a702f7881b802/11e69e15-d9e7-4182-aeb0-aacd9fc81e02/pexels-raphael-brasileiro-1687007.jpg",
        alt: "Trauma and Grief",
        body: "Life's challenges, whether a difficult childhood, a traumatic event or series of events, or the loss of someone or something deeply meaningful, can lead to profound experiences of trauma and grief. Therapy offers a supportive space to process these experiences, care for yourself amidst painful thoughts and emotions, and work toward a sense of grounding and meaning.",
        delay: 200,
    },
    FocusArea {
        title: "Therapy for Second Generation Individuals In Immigrant Families",
        image: "https://images.squarespace-cdn.com/content/v1/64d3ecd6f85a702f7881b802/eeca6997-7fd7-4376-b0a4-df60a0f368e5/pexels-polina-tankilevitch-8202906.jpg",
        alt: "Second Generation",
        body: "Second-generation individuals in immigrant families, born in the U.S. to at least one parent born abroad, often navigate the complexities of multiple cultures and diverse expectations. This experience can bring challenges such as feeling like a foreigner in your own country and navigating strained family relationships. Therapy offers a supportive space to explore and process this unique aspect of your identity.",
        delay: 300,
    },
];

#[derive(Properties, PartialEq)]
struct HeroLineProps {
    state: RevealState,
    delay: u32,
    children: Children,
}

// Hero lines fade in one after another once the hero marker is in view
#[function_component(HeroLine)]
fn hero_line(props: &HeroLineProps) -> Html {
    html! {
        <div
            class={classes!("hero-line", props.state.class())}
            style={reveal_style(props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[function_component]
pub fn Home() -> Html {
    use_title(config::SITE_TITLE.to_string());
    let navigator = use_navigator();
    // The marker sits just below the hero so the copy reveals as the hero settles.
    let (hero_marker, hero_state) = use_visibility(ObserverOverrides::default());

    let schedule = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        match navigator.as_ref() {
            Some(navigator) => navigator.push(&Route::ContactUs),
            None => log::warn!("No router available for consultation link"),
        }
    });

    html! {
        <div class="home-page">
            <AnimatedSection class="nav-hero">
                <nav class="site-nav">
                    <img src={LOGO_URL} alt="Jennifer Hahm Logo" class="site-logo" />
                </nav>

                <section class="hero">
                    <div class="hero-video-wrapper">
                        <video class="hero-video" autoplay=true loop=true muted=true playsinline=true>
                            <source src="/hero.mp4" type="video/mp4" />
                        </video>
                    </div>
                    <div class="hero-content">
                        <HeroLine state={hero_state} delay={300}>
                            <h1>{"Psychological Care for"}</h1>
                        </HeroLine>
                        <HeroLine state={hero_state} delay={500}>
                            <h2 class="hero-subheading">{"Change, Insight, and Well-Being"}</h2>
                        </HeroLine>
                        <HeroLine state={hero_state} delay={700}>
                            <p class="hero-text">
                                {"Offering individual psychotherapy for adults via telehealth in Michigan and "}
                                <span class="underline">{"most U.S. states"}</span>
                                {" through PSYPACT participation"}
                            </p>
                        </HeroLine>
                        <HeroLine state={hero_state} delay={900}>
                            <button class="hero-cta" onclick={schedule}>
                                {"SCHEDULE A CONSULTATION"}
                            </button>
                        </HeroLine>
                    </div>
                </section>

                <div class="hero-marker" ref={hero_marker}></div>
            </AnimatedSection>

            <AnimatedSection class="about">
                <div class="about-inner">
                    <div class="about-text">
                        <h2>{"About Dr. Jennifer Hahm"}</h2>
                        <p>
                            {"Finding time and opportunities to care for ourselves can be incredibly challenging in today's busy and demanding world. I believe therapy offers a dedicated space for self-care, providing the support and tools needed to improve this essential practice. Therapy can help individuals identify and clarify their goals, values, and the various elements that contribute to their well-being, recognizing that these aspects vary from person to person."}
                        </p>
                        <p>
                            {"I am dedicated to supporting this journey by offering active listening, psychological knowledge, empathy, compassion, and insights into behavioral patterns and tendencies. I hold a master's degree in Clinical Psychology from the Michigan School of Psychology (2012) and a Ph.D. in Counseling Psychology from Western Michigan University (2018). My experience spans therapy and psychological assessment in psychiatric inpatient units, academic medical centers, universities, and outpatient practice settings."}
                        </p>
                        <p>
                            {"My therapeutic approach is primarily psychodynamic and humanistic, enriched by influences from positive psychology, existentialism, family systems theory, acceptance and commitment concepts, and mindfulness practices."}
                        </p>
                    </div>
                    <div class="about-portrait">
                        <img src={PORTRAIT_URL} alt="Dr. Jennifer Hahm" />
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection>
                <div class="section-divider"></div>
            </AnimatedSection>

            <AnimatedSection class="therapy-space">
                <div class="therapy-intro">
                    <h2>
                        {"Therapy can be a space where you invest in yourself—"}
                        <span class="block">{"one of the highest forms of self-care."}</span>
                    </h2>
                    <p>
                        {"You may be led to therapy by anxiety, depression, relationship stress, past or recent trauma, grief and loss, self-esteem issues, or challenges with family, parenting, or parental relationships. Whatever the source of your stress, you don't have to face it alone. Therapy offers you the time and space to work toward wellness and peace."}
                    </p>
                </div>

                <div class="therapy-divider"></div>

                <div class="focus-grid">
                    { for FOCUS_AREAS.iter().map(|area| html! {
                        <AnimatedSection delay={area.delay}>
                            <div class="focus-item">
                                <div class="focus-image">
                                    <img src={area.image} alt={area.alt} />
                                </div>
                                <div class="focus-copy">
                                    <h3>{area.title}</h3>
                                    <p>{area.body}</p>
                                </div>
                            </div>
                        </AnimatedSection>
                    }) }
                </div>
            </AnimatedSection>

            <AnimatedSection class="rates">
                <div class="rates-inner">
                    <h2>{"Rates and Insurance"}</h2>
                    <p class="fee">{"Session Fee – $200"}</p>
                    <p class="fee last-fee">{"Psychodiagnostic Evaluation – $225"}</p>
                    <p>{"I accept both private pay and insurance. I am in-network with BCBS and Aetna."}</p>
                    <p>
                        {"For out-of-network plans, I've partnered with Mentaya using"}
                        <a href="#" class="underline">{" this tool"}</a>
                        {" to help you check your eligibility for reimbursement for my services."}
                    </p>
                </div>
            </AnimatedSection>

            <AnimatedSection class="availability">
                <p>{"Unable to accept new clients at this time."}</p>
            </AnimatedSection>

            <AnimatedSection>
                <section class="faq-section">
                    <div class="faq-inner">
                        <h2>{"Frequently Asked Questions"}</h2>
                        <FaqAccordion entries={FAQS.to_vec()} />
                    </div>
                </section>
            </AnimatedSection>

            <AnimatedSection class="quote">
                <img src={OCEAN_URL} alt="Ocean background" class="quote-background" />
                <div class="quote-text">
                    <p>{"\"I have come to believe that caring for myself is not self-indulgent."}</p>
                    <p>{"Caring for myself is an act of survival.\""}</p>
                    <p class="quote-author">{"— Audre Lorde"}</p>
                </div>
            </AnimatedSection>

            <AnimatedSection>
                <footer class="site-footer">
                    <h2>{"Jennifer Hahm, Ph.D., Licensed Psychologist"}</h2>
                    <div class="footer-contact">
                        <p>
                            <a href="mailto:jennifer@drjenniferhahm.com" class="underline">
                                {"jennifer@drjenniferhahm.com"}
                            </a>
                        </p>
                        <p class="footer-phones">
                            <span>
                                {"Phone: "}
                                <a href="tel:2489398150" class="underline">{"(248) 939-8150"}</a>
                            </span>
                            <span class="separator">{"|"}</span>
                            <span>{"Fax: (248) 939-8190"}</span>
                        </p>
                        <p>{"28175 Haggerty Rd, Novi, MI 48377"}</p>
                        <div class="footer-links">
                            <Link<Route> to={Route::Home} classes="underline">{"Home"}</Link<Route>>
                            <a href="#" class="underline">{"Privacy Policy"}</a>
                            <a href="#" class="underline">{"Good Faith Estimate"}</a>
                        </div>
                    </div>
                    <div class="client-portal">
                        <a href="#" class="underline">{"Client Portal"}</a>
                    </div>
                    <p class="copyright">
                        {"© 2025 Jennifer Hahm Ph.D. Psychological Services, PLLC. All rights reserved."}
                    </p>
                </footer>
            </AnimatedSection>

            <style>
                {r#"
                .home-page {
                    min-height: 100vh;
                    font-family: Georgia, 'Times New Roman', serif;
                }

                .animated-section,
                .hero-line {
                    transition-property: opacity, transform;
                    transition-timing-function: ease-out;
                }

                .animated-section {
                    transition-duration: 1000ms;
                }

                .hero-line {
                    transition-duration: 1500ms;
                }

                .reveal-hidden {
                    opacity: 0;
                    transform: translateY(2rem);
                }

                .reveal-shown {
                    opacity: 1;
                    transform: translateY(0);
                }

                .underline {
                    text-decoration: underline;
                    color: inherit;
                }

                .nav-hero {
                    padding: 0 3.5rem;
                    background: #f3f0e8;
                }

                .site-nav {
                    display: flex;
                    align-items: center;
                    padding: 3rem 0;
                }

                .site-logo {
                    height: 4.3rem;
                    width: auto;
                }

                .hero {
                    position: relative;
                    height: 46rem;
                    overflow: hidden;
                    background: #f3f0e8;
                }

                .hero-video-wrapper {
                    position: absolute;
                    inset: 0;
                    filter: brightness(0.6);
                }

                .hero-video {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .hero-content {
                    position: relative;
                    z-index: 2;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100%;
                    padding: 0 1.5rem;
                    text-align: center;
                    color: #fff;
                }

                .hero-content h1,
                .hero-subheading {
                    font-size: 55px;
                    font-weight: 600;
                    letter-spacing: 0.025em;
                    line-height: 1.25;
                }

                .hero-content h1 {
                    margin-bottom: 6rem;
                }

                .hero-subheading {
                    margin: -40px 0 1.5rem;
                }

                .hero-text {
                    max-width: 56rem;
                    font-size: 22px;
                    line-height: 1.6;
                }

                .hero-cta {
                    margin-top: 3rem;
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: #fff;
                    color: #000;
                    font-size: 0.875rem;
                    font-weight: 500;
                    letter-spacing: 0.05em;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .hero-cta:hover {
                    background: #f3f4f6;
                }

                .hero-marker {
                    height: 50px;
                    background: #f3f0e8;
                }

                .about {
                    background: #fefefe;
                    padding: 15% 15%;
                }

                .about-inner {
                    display: flex;
                    gap: 12rem;
                    justify-content: space-around;
                    align-items: flex-start;
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .about-text {
                    flex: 1;
                    color: #7E7E6B;
                }

                .about-text h2 {
                    font-size: 2.25rem;
                    margin-bottom: 2.5rem;
                }

                .about-text p {
                    font-size: 1.125rem;
                    font-weight: 200;
                    margin-bottom: 1.25rem;
                }

                .about-portrait {
                    flex-shrink: 0;
                    width: 400px;
                }

                .about-portrait img {
                    width: 100%;
                    border-radius: 0.375rem;
                    object-fit: cover;
                }

                .section-divider {
                    margin: 0 5rem 5rem;
                    border: 1px solid #7E7E6B;
                }

                .therapy-space {
                    background: #f3f0e8;
                    padding: 5rem 1rem;
                    text-align: center;
                    color: #374151;
                }

                .therapy-intro {
                    max-width: 56rem;
                    margin: 0 auto 4rem;
                }

                .therapy-intro h2 {
                    font-size: 2.25rem;
                    font-weight: 100;
                    color: #7E7E6B;
                }

                .therapy-intro .block {
                    display: block;
                    margin-top: 0.5rem;
                }

                .therapy-intro p {
                    margin-top: 2rem;
                    font-size: 1.25rem;
                    line-height: 1.6;
                    color: #4b5563;
                }

                .therapy-divider {
                    width: 90%;
                    max-width: 72rem;
                    margin: 0 auto 5rem;
                    border-bottom: 1px solid #7E7E6B;
                }

                .focus-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem;
                    padding: 0 1.5rem;
                }

                .focus-item {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .focus-image {
                    width: 350px;
                    height: 350px;
                    margin: 0 auto 1.5rem;
                    overflow: hidden;
                    border-radius: 50%;
                }

                .focus-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .focus-copy {
                    max-width: 24rem;
                }

                .focus-copy h3 {
                    font-size: 1.5rem;
                    color: #1f2937;
                    margin-bottom: 1rem;
                }

                .focus-copy p {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #4b5563;
                    line-height: 1.6;
                }

                .rates {
                    background: #94b0b0;
                    padding: 5rem 1rem;
                    text-align: center;
                    color: #000;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .rates-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .rates h2 {
                    font-family: Georgia, 'Times New Roman', serif;
                    font-size: 2.25rem;
                    font-weight: 100;
                    margin-bottom: 2.5rem;
                }

                .rates .fee {
                    font-size: 1.125rem;
                    margin-bottom: 1rem;
                }

                .rates .last-fee {
                    margin-bottom: 2rem;
                }

                .availability {
                    background: #f3f0e8;
                    padding: 6rem 1rem;
                    text-align: center;
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: #1f2937;
                }

                .faq-section {
                    background: #C6EDF0;
                    padding: 3rem 1.5rem;
                }

                .faq-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .faq-inner h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 2rem;
                }

                .faq-item {
                    border-top: 1px solid #9ca3af;
                    padding-top: 1rem;
                    margin-bottom: 1rem;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 0 1rem 0 0;
                    background: none;
                    border: none;
                    text-align: left;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #1f2937;
                    cursor: pointer;
                }

                .faq-question:focus {
                    outline: none;
                }

                .question-text {
                    flex: 1;
                }

                .chevron {
                    margin-left: 0.5rem;
                    transition: transform 300ms;
                }

                .chevron.rotated {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    margin-top: 0.5rem;
                    padding-right: 2rem;
                    color: #374151;
                }

                .quote {
                    position: relative;
                    height: 70vh;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .quote-background {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.7;
                }

                .quote-text {
                    position: relative;
                    z-index: 1;
                    max-width: 64rem;
                    padding: 0 1.5rem;
                    text-align: center;
                    font-size: 1.875rem;
                    color: #000;
                }

                .quote-text p + p {
                    margin-top: 1rem;
                }

                .quote-author {
                    font-size: 1rem;
                    font-weight: 300;
                    color: #374151;
                }

                .site-footer {
                    background: #f3f0e8;
                    padding: 4rem 1rem;
                    text-align: center;
                    color: #1f2937;
                }

                .site-footer h2 {
                    font-size: 1.875rem;
                    font-weight: 300;
                    margin-bottom: 1.5rem;
                }

                .footer-contact p {
                    margin-bottom: 0.5rem;
                    font-size: 1.125rem;
                }

                .footer-phones {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                }

                .footer-links {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: 0.5rem;
                }

                .client-portal {
                    margin-top: 6rem;
                    font-size: 1.125rem;
                }

                .copyright {
                    margin-top: 2.5rem;
                    font-size: 1.125rem;
                    color: #374151;
                }

                @media (max-width: 1024px) {
                    .about-inner {
                        flex-direction: column-reverse;
                        gap: 3rem;
                    }

                    .about-portrait {
                        width: 100%;
                        max-width: 24rem;
                    }

                    .focus-grid {
                        grid-template-columns: 1fr;
                    }
                }

                @media (max-width: 640px) {
                    .nav-hero {
                        padding: 0 1rem;
                    }

                    .site-nav {
                        padding: 1.5rem 0;
                    }

                    .site-logo {
                        height: 3rem;
                    }

                    .hero {
                        height: 60vh;
                    }

                    .hero-content h1,
                    .hero-subheading {
                        font-size: 1.5rem;
                    }

                    .hero-content h1 {
                        margin-bottom: 2rem;
                    }

                    .hero-subheading {
                        margin-top: -20px;
                    }

                    .hero-text {
                        font-size: 1rem;
                    }

                    .hero-marker {
                        height: 25px;
                    }

                    .about {
                        padding: 3rem 1rem;
                    }

                    .focus-image {
                        width: 16rem;
                        height: 16rem;
                    }

                    .footer-phones {
                        flex-direction: column;
                        gap: 0.25rem;
                    }

                    .footer-phones .separator {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}

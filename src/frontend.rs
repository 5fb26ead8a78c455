use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, ScrollBehavior,
    ScrollIntoViewOptions,
};
use yew::prelude::*;

use crate::content;
use crate::particles::{link_alpha, ParticleField, LINK_DISTANCE};
use crate::typewriter::Typewriter;
use crate::viewport::{active_section, is_scrolled, Section, SectionBounds};

const GLOW_RADIUS_PX: f64 = 600.0;
const TRAIL_FILL: &str = "rgba(10, 10, 15, 0.1)";
const PARTICLE_FILL: &str = "rgba(34, 211, 238, 0.5)";
const LINK_STROKE_RGB: &str = "34, 211, 238";
const LINK_LINE_WIDTH: f64 = 0.5;

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

fn scroll_offset() -> f64 {
    window().and_then(|win| win.scroll_y().ok()).unwrap_or(0.0)
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Reads the rendered box of every section currently in the DOM, in
/// document order.
fn section_bounds() -> Vec<SectionBounds> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };

    Section::ALL
        .iter()
        .filter_map(|&section| {
            let rect = document
                .get_element_by_id(section.id())?
                .get_bounding_client_rect();
            Some(SectionBounds {
                section,
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect()
}

fn scroll_to_section(section: Section) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Arms the single typewriter timer. Every fired step re-arms it with the
/// delay the machine asks for next; replacing the slot cancels whatever was
/// pending, so at most one timer is ever live.
fn arm_typewriter(
    slot: &Rc<RefCell<Option<Timeout>>>,
    machine: &Rc<RefCell<Typewriter>>,
    typed: &UseStateHandle<String>,
) {
    let delay_ms = machine.borrow().delay_ms();
    let slot_handle = slot.clone();
    let machine_handle = machine.clone();
    let typed = typed.clone();

    let timeout = Timeout::new(delay_ms, move || {
        {
            let mut machine = machine_handle.borrow_mut();
            machine.step();
            typed.set(machine.text().to_string());
        }
        arm_typewriter(&slot_handle, &machine_handle, &typed);
    });

    *slot.borrow_mut() = Some(timeout);
}

fn request_next_frame(handle: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let win = window()?;
    let slot = handle.borrow();
    let closure = slot.as_ref()?;
    win.request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

/// One animation frame: fade the previous frame instead of clearing it,
/// draw every particle, then link nearby pairs with distance-faded lines.
fn draw_frame(ctx: &CanvasRenderingContext2d, field: &ParticleField, canvas: &HtmlCanvasElement) {
    ctx.set_fill_style_str(TRAIL_FILL);
    ctx.fill_rect(
        0.0,
        0.0,
        f64::from(canvas.width()),
        f64::from(canvas.height()),
    );

    let particles = field.particles();
    for (index, particle) in particles.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(
            particle.x,
            particle.y,
            particle.radius,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.set_fill_style_str(PARTICLE_FILL);
        ctx.fill();

        for (other_index, other) in particles.iter().enumerate() {
            if index == other_index {
                continue;
            }

            let dx = particle.x - other.x;
            let dy = particle.y - other.y;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance < LINK_DISTANCE {
                ctx.begin_path();
                ctx.move_to(particle.x, particle.y);
                ctx.line_to(other.x, other.y);
                ctx.set_stroke_style_str(&format!(
                    "rgba({LINK_STROKE_RGB}, {:.4})",
                    link_alpha(distance)
                ));
                ctx.set_line_width(LINK_LINE_WIDTH);
                ctx.stroke();
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeadingProps {
    number: AttrValue,
    title: AttrValue,
}

#[function_component(SectionHeading)]
fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <span class="section-number">{props.number.clone()}{"."}</span>
            <h2>{props.title.clone()}</h2>
            <div class="section-rule"></div>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| Section::Home);
    let pointer = use_state_eq(|| (0.0_f64, 0.0_f64));
    let menu_open = use_state_eq(|| false);
    let typed = use_state_eq(String::new);

    let canvas_ref = use_node_ref();
    let machine = use_mut_ref(|| Typewriter::new(content::ROLES));
    let field = use_mut_ref(|| {
        let (width, height) = viewport_size();
        ParticleField::new(width, height)
    });

    // Viewport tracker: scroll spy plus pointer glow coordinates. Both
    // listeners are removed when their handles drop at unmount.
    {
        let scrolled = scrolled.clone();
        let active = active.clone();
        let pointer = pointer.clone();
        use_effect_with((), move |_| {
            let scroll_listener = window().map(|win| {
                EventListener::new(&win, "scroll", move |_| {
                    scrolled.set(is_scrolled(scroll_offset()));
                    active.set(active_section(&section_bounds()));
                })
            });

            let move_listener = window().map(|win| {
                EventListener::new(&win, "mousemove", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        pointer.set((f64::from(event.client_x()), f64::from(event.client_y())));
                    }
                })
            });

            move || {
                drop(scroll_listener);
                drop(move_listener);
            }
        });
    }

    // Typewriter driver: one self-re-arming timeout.
    {
        let machine = machine.clone();
        let typed = typed.clone();
        use_effect_with((), move |_| {
            let slot: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
            arm_typewriter(&slot, &machine, &typed);

            move || {
                slot.borrow_mut().take();
            }
        });
    }

    // Particle field: seed once, then a self-resubmitting animation frame
    // loop. A missing 2d context skips rendering for this mount.
    {
        let canvas_ref = canvas_ref.clone();
        let field = field.clone();
        use_effect_with((), move |_| {
            let frame_closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                Rc::new(RefCell::new(None));
            let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
            let mut resize_listener = None;

            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let (width, height) = viewport_size();
                canvas.set_width(width as u32);
                canvas.set_height(height as u32);
                field.borrow_mut().resize(width, height);

                let mut rng = fastrand::Rng::new();
                field.borrow_mut().seed_if_empty(&mut rng);

                let context = canvas
                    .get_context("2d")
                    .ok()
                    .flatten()
                    .and_then(|value| value.dyn_into::<CanvasRenderingContext2d>().ok());

                if let Some(ctx) = context {
                    resize_listener = window().map(|win| {
                        let canvas = canvas.clone();
                        let field = field.clone();
                        EventListener::new(&win, "resize", move |_| {
                            let (width, height) = viewport_size();
                            canvas.set_width(width as u32);
                            canvas.set_height(height as u32);
                            // Particle positions stay as they are; the next
                            // reflection check pulls strays back in.
                            field.borrow_mut().resize(width, height);
                        })
                    });

                    if prefers_reduced_motion() {
                        draw_frame(&ctx, &field.borrow(), &canvas);
                    } else {
                        let inner_closure = frame_closure.clone();
                        let inner_id = frame_id.clone();
                        let field = field.clone();
                        *frame_closure.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
                            field.borrow_mut().step();
                            draw_frame(&ctx, &field.borrow(), &canvas);
                            inner_id.set(request_next_frame(&inner_closure));
                        }));
                        frame_id.set(request_next_frame(&frame_closure));
                    }
                }
            }

            move || {
                if let Some(id) = frame_id.get() {
                    if let Some(win) = window() {
                        let _ = win.cancel_animation_frame(id);
                    }
                }
                frame_closure.borrow_mut().take();
                drop(resize_listener);
            }
        });
    }

    let on_nav_select = {
        let menu_open = menu_open.clone();
        Callback::from(move |section: Section| {
            scroll_to_section(section);
            menu_open.set(false);
        })
    };

    let on_menu_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_button = |section: Section, mobile: bool| {
        let on_nav_select = on_nav_select.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_nav_select.emit(section));
        let is_active = *active == section;
        let class = if mobile {
            classes!("nav-link", "nav-link-mobile")
        } else {
            classes!("nav-link", is_active.then_some("is-active"))
        };
        html! {
            <button key={section.id()} type="button" {class} {onclick}>
                {section.label()}
            </button>
        }
    };

    let (glow_x, glow_y) = *pointer;
    let glow_style = format!(
        "background: radial-gradient({GLOW_RADIUS_PX}px circle at {glow_x:.0}px {glow_y:.0}px, rgba(34, 211, 238, 0.08), transparent 40%);"
    );

    html! {
        <div class="page-shell">
            <canvas ref={canvas_ref} class="particle-canvas" aria-hidden="true"></canvas>
            <div class="grid-overlay" aria-hidden="true"></div>
            <div class="pointer-glow" style={glow_style} aria-hidden="true"></div>

            <div class="page-content">
                <nav class={classes!("site-nav", (*scrolled).then_some("is-scrolled"))}>
                    <div class="nav-inner">
                        <div class="nav-brand">
                            <span class="brand-mark" aria-hidden="true">{">_"}</span>
                            <span class="brand-name">{"devName"}</span>
                        </div>
                        <div class="nav-links">
                            { for Section::ALL.iter().map(|&section| nav_button(section, false)) }
                        </div>
                        <button
                            class="menu-toggle"
                            type="button"
                            aria-label="Toggle navigation menu"
                            aria-expanded={(*menu_open).to_string()}
                            onclick={on_menu_toggle}
                        >
                            <span aria-hidden="true">{if *menu_open { "✕" } else { "☰" }}</span>
                        </button>
                    </div>
                    if *menu_open {
                        <div class="nav-menu-mobile">
                            { for Section::ALL.iter().map(|&section| nav_button(section, true)) }
                        </div>
                    }
                </nav>

                <main>
                    <section id={Section::Home.id()} class="hero">
                        <div class="hero-inner">
                            <p class="hero-path">{"~/portfolio/home"}</p>
                            <h1>
                                <span>{"Hi, I'm "}</span>
                                <span class="hero-name">{"Khushbu Sharma"}</span>
                            </h1>
                            <p class="hero-roles">
                                <span class="prompt-mark">{">"}</span>
                                <span class="typed-text">{(*typed).clone()}</span>
                                <span class="caret" aria-hidden="true"></span>
                            </p>
                            <p class="hero-copy">
                                {"Building scalable systems and crafting elegant solutions to complex problems. \
                                  Passionate about distributed systems, performance optimization, and developer experience."}
                            </p>
                            <div class="hero-actions">
                                <button
                                    class="button-primary"
                                    type="button"
                                    onclick={{
                                        let on_nav_select = on_nav_select.clone();
                                        Callback::from(move |_: MouseEvent| on_nav_select.emit(Section::Contact))
                                    }}
                                >
                                    {"Get In Touch →"}
                                </button>
                                <a
                                    class="button-outline"
                                    href="https://github.com/Khushbu710"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {"GitHub"}
                                </a>
                            </div>
                            <div class="hero-card">
                                <p class="hero-card-title">{"Indian Institute of Technology, Mandi"}</p>
                                <p class="hero-card-sub">{"2024-2028"}</p>
                            </div>
                        </div>
                    </section>

                    <section id={Section::About.id()} class="section-block">
                        <SectionHeading number="01" title="About Me" />
                        <div class="about-columns">
                            <div class="about-copy">
                                <p>
                                    {"I'm a second-year B.Tech student in Mechanical Engineering at IIT Mandi with a \
                                      growing passion for technology and innovation. My interests lie strongly in \
                                      Generative AI and AI agents, where I've worked on projects that explore practical \
                                      applications of intelligent systems. Alongside AI, I also have hands-on experience \
                                      in web development, focusing more on practical implementation rather than theory."}
                                </p>
                                <p>
                                    {"Along with technical skills, I have proficiency in Japanese language, which broadens \
                                      my communication and cultural perspective. I'm passionate about continuous learning, \
                                      exploring emerging technologies, and collaborating on impactful projects at the \
                                      intersection of AI, engineering, and innovation."}
                                </p>
                            </div>
                            <div class="about-highlights">
                                { for content::ABOUT_HIGHLIGHTS.iter().map(|highlight| html! {
                                    <div key={highlight.title} class="highlight-card">
                                        <h3>{highlight.title}</h3>
                                        <p class="muted">{highlight.blurb}</p>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </section>

                    <section id={Section::Experience.id()} class="section-block">
                        <SectionHeading number="02" title="Experience" />
                        <div class="timeline">
                            { for content::EXPERIENCES.iter().map(|experience| html! {
                                <article key={experience.title} class="timeline-entry">
                                    <div class="timeline-entry-head">
                                        <div>
                                            <h3>{experience.title}</h3>
                                            <p class="timeline-org">{experience.organization}</p>
                                        </div>
                                        <span class="timeline-period">{experience.period}</span>
                                    </div>
                                    <p class="muted">{experience.description}</p>
                                </article>
                            }) }
                        </div>
                    </section>

                    <section id={Section::Skills.id()} class="section-block">
                        <SectionHeading number="03" title="Tech Stack" />
                        <div class="skills-grid">
                            { for content::SKILLS.iter().map(|category| html! {
                                <div key={category.name} class="skill-card">
                                    <h3>{category.name}</h3>
                                    <ul>
                                        { for category.skills.iter().map(|skill| html! {
                                            <li key={*skill}>{*skill}</li>
                                        }) }
                                    </ul>
                                </div>
                            }) }
                        </div>
                    </section>

                    <section id={Section::Projects.id()} class="section-block">
                        <SectionHeading number="04" title="Featured Projects" />
                        <div class="projects-grid">
                            { for content::PROJECTS.iter().map(|project| html! {
                                <article key={project.title} class="project-card">
                                    <h3>{project.title}</h3>
                                    <p class="muted">{project.description}</p>
                                    <div class="tech-tags">
                                        { for project.tech.iter().map(|tag| html! {
                                            <span key={*tag} class="tech-tag">{*tag}</span>
                                        }) }
                                    </div>
                                </article>
                            }) }
                        </div>
                    </section>

                    <section id={Section::Contact.id()} class="section-block">
                        <SectionHeading number="05" title="Get In Touch" />
                        <p class="contact-lede">
                            {"My inbox is always open. Whether you have a question, want to collaborate on a \
                              project, or just want to say hi, I'll get back to you as soon as possible!"}
                        </p>
                        <div class="contact-grid">
                            { for content::CONTACTS.iter().map(|contact| html! {
                                <a
                                    key={contact.label}
                                    class="contact-card"
                                    href={contact.href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <p class="contact-label">{contact.label}</p>
                                    <p class="contact-value">{contact.value}</p>
                                </a>
                            }) }
                        </div>
                    </section>
                </main>

                <footer class="site-footer">
                    <p>{"Thank you for visiting!"}</p>
                    <p class="muted">{"© 2025 Khushbu Sharma. All rights reserved."}</p>
                </footer>
            </div>
        </div>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}

use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::header::Header;
use crate::components::reveal;

#[function_component(Home)]
pub fn home() -> Html {
    // Start watching reveal elements once the page markup is rendered.
    use_effect_with_deps(
        move |_| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                reveal::mount(&document);
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <Header />
            <main>
                <section id="home" class="hero">
                    <div class="hero__content">
                        <h1>{"Food service, with gratitude."}</h1>
                        <p class="hero__lead">
                            {"Wholesale supply, catering and delivery for restaurants, \
                              cafés and venues that care about where their food comes from."}
                        </p>
                        <a href="#contact" class="btn btn--primary">{"Get in Touch"}</a>
                    </div>
                </section>

                <section id="services" class="services">
                    <h2 class="reveal">{"What we do"}</h2>
                    <div class="services__grid">
                        <article class="service-card reveal">
                            <h3>{"Wholesale Supply"}</h3>
                            <p>
                                {"Seasonal produce, dry goods and dairy from growers we \
                                  know by name, delivered on your schedule."}
                            </p>
                        </article>
                        <article class="service-card reveal">
                            <h3>{"Menu & Catering"}</h3>
                            <p>
                                {"Event catering and menu development support, from a \
                                  single service to a full season."}
                            </p>
                        </article>
                        <article class="service-card reveal">
                            <h3>{"Delivery & Logistics"}</h3>
                            <p>
                                {"Cold-chain delivery across the region with order \
                                  cut-offs that work for working kitchens."}
                            </p>
                        </article>
                    </div>
                </section>

                <section id="about" class="about">
                    <div class="about__inner reveal">
                        <h2>{"About Gratitude"}</h2>
                        <p>
                            {"We started as a farm stand and grew into a foodservice \
                              partner for kitchens across the region. The idea never \
                              changed: good ingredients, handled with care, priced \
                              honestly."}
                        </p>
                        <p>
                            {"Today we supply over a hundred restaurants, cafés and \
                              caterers, and we still answer the phone ourselves."}
                        </p>
                    </div>
                </section>

                <section id="contact" class="contact">
                    <div class="contact__inner reveal">
                        <h2>{"Work with us"}</h2>
                        <p>
                            {"Tell us about your kitchen and we'll put together a quote."}
                        </p>
                        <ContactForm />
                    </div>
                </section>
            </main>
            <footer class="footer">
                <p>{"© 2025 Gratitude Foodservice · hello@gratitude.food"}</p>
            </footer>
        </>
    }
}

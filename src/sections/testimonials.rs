use leptos::prelude::*;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"開発者の声"</h2>
                </div>
                <div class="testimonials-grid">
                    <Testimonial
                        quote="Context Generatorのおかげで、AIとのコミュニケーションが劇的に改善しました。プロジェクトの説明時間が1/5になり、より本質的な開発作業に集中できています。"
                        author="Taro"
                        role="Senior Developer"
                    />
                    <Testimonial
                        quote="複数のプロジェクトを並行して進めていますが、このツールのおかげで各プロジェクトの切り替えがスムーズになりました。AIとの対話の質も向上し、開発速度が約2倍になった感覚です。"
                        author="Hanako"
                        role="Full-stack Engineer"
                    />
                </div>
            </div>
        </section>
    }
}

/// Quote block. Quotation marks come from the stylesheet, not the copy.
#[component]
pub fn Testimonial(
    quote: &'static str,
    author: &'static str,
    role: &'static str,
) -> impl IntoView {
    view! {
        <figure class="testimonial">
            <blockquote class="testimonial-quote">{quote}</blockquote>
            <figcaption class="testimonial-caption">
                <span class="testimonial-author">{author}</span>
                <span class="testimonial-role">{role}</span>
            </figcaption>
        </figure>
    }
}

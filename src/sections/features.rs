use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"主な機能"</h2>
                </div>
                <div class="features-grid">
                    <Feature
                        icon="⚡"
                        title="ワンクリック要約"
                        description="複雑なプロジェクト構造を1つのマークダウンファイルに集約"
                    />
                    <Feature
                        icon="🤝"
                        title="AIとの効率的な対話"
                        description="プロジェクトのコンテキストを瞬時にAIへ伝達"
                    />
                    <Feature
                        icon="📁"
                        title="マルチプロジェクト対応"
                        description="プロジェクトごとの設定を自動保存"
                    />
                    <Feature
                        icon="⏱"
                        title="時間の節約"
                        description="AIへのプロジェクト説明時間を80%削減"
                    />
                </div>
            </div>
        </section>
    }
}

/// Stateless feature card: glyph, heading, one-line description.
#[component]
pub fn Feature(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}

#[component]
pub fn Workflow() -> impl IntoView {
    view! {
        <section id="workflow" class="workflow">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"使い方はシンプル"</h2>
                    <p class="section-description">
                        "フォルダを選んで、対象を絞って、生成するだけ。"
                    </p>
                </div>
                <div class="workflow-grid">
                    <DetailedFeature
                        icon="🗂"
                        title="対象フォルダを選択"
                        description="要約したいプロジェクトのルートフォルダをGUIで指定。サブフォルダも自動で走査されます。"
                        command=None
                    />
                    <DetailedFeature
                        icon="🔍"
                        title="拡張子でフィルタ"
                        description="対象にする拡張子と除外パターンをプロジェクトごとに設定。次回起動時も設定は保持されます。"
                        command=None
                    />
                    <DetailedFeature
                        icon="📄"
                        title="Markdownへ集約"
                        description="選択したソース一式を1つのマークダウンにまとめ、そのままAIへアップロードできます。"
                        command=Some("→ project_name.md")
                    />
                </div>
            </div>
        </section>
    }
}

/// Wider card for the workflow grid, with an optional command snippet line.
#[component]
pub fn DetailedFeature(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    command: Option<&'static str>,
) -> impl IntoView {
    view! {
        <article class="feature-card feature-card-wide">
            <div class="feature-icon">{icon}</div>
            <div class="feature-body">
                <h3 class="feature-title">{title}</h3>
                <p class="feature-description">{description}</p>
                {command.map(|c| view! {
                    <div class="feature-code-box">
                        <code class="feature-code-text">{c}</code>
                    </div>
                })}
            </div>
        </article>
    }
}

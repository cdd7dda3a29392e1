use leptos::prelude::*;

#[component]
pub fn Comparison() -> impl IntoView {
    view! {
        <section class="comparison">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"従来の方法との比較"</h2>
                </div>
                <table class="comparison-table">
                    <thead>
                        <tr>
                            <th>"課題"</th>
                            <th>"従来の方法"</th>
                            <th>"Context Generator"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <ComparisonRow
                            challenge="プロジェクト説明時間"
                            traditional="複数ファイルからコピー&ペースト"
                            with_tool="1クリックとファイルアップロード"
                        />
                        <ComparisonRow
                            challenge="AIの理解度"
                            traditional="部分的"
                            with_tool="全体的"
                        />
                        <ComparisonRow
                            challenge="複数プロジェクト管理"
                            traditional="煩雑"
                            with_tool="簡単"
                        />
                        <ComparisonRow
                            challenge="設定の再利用"
                            traditional="困難"
                            with_tool="自動化"
                        />
                        <ComparisonRow
                            challenge="チーム内共有"
                            traditional="時間がかかる"
                            with_tool="即時可能"
                        />
                    </tbody>
                </table>
            </div>
        </section>
    }
}

/// One table row; the tool column is rendered emphasized.
#[component]
pub fn ComparisonRow(
    challenge: &'static str,
    traditional: &'static str,
    with_tool: &'static str,
) -> impl IntoView {
    view! {
        <tr>
            <td>{challenge}</td>
            <td>{traditional}</td>
            <td class="comparison-tool-cell">{with_tool}</td>
        </tr>
    }
}

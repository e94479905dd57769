//! Demo flows a workspace can be seeded with.

use crate::{
    import::{IMPORT_NODE_HEIGHT, IMPORT_NODE_WIDTH, IMPORT_ROW_SPACING, IMPORT_TOP, IMPORT_X},
    model::{Edge, Flow, Node, NodeKind, NodeStatus},
};

const BOILER_STEPS: &[(&str, NodeKind)] = &[
    ("壹. 起爐前檢查及通知", NodeKind::Milestone),
    ("1. Email 通知清潔 CEMS 偵測器（需提前 3 天通知 Y9 郭光釗）。", NodeKind::Task),
    ("2. 檢查鍋爐本體、爐膛、節熱器、BFG 加熱器、燃料管線等設備及耐火材是否良好可用。", NodeKind::Task),
    ("3. 檢查風道、煙道各人孔封閉是否良好。", NodeKind::Task),
    ("4. 確認所有管線盲封（氮氣、燃氣管線）已拆除完畢。", NodeKind::Task),
    ("5. 確認鍋爐各安全閥是否設定安裝完成，且 GAG 治具已取下。", NodeKind::Task),
    ("6. 檢查 ERV 前關斷閥（MS-VB12、14）是否為開啟狀態。", NodeKind::Task),
    ("7. 將 BLR-4 MS 緊急排放控制閥 PCV-MS51-D 擺手動並關閉。", NodeKind::Task),
    ("8. 檢查空氣預熱器軸承潤滑油泵、驅動減速機、各燃燒器的 BTV、火燄偵測器是否良好可用。", NodeKind::Task),
    ("9. 檢查 MS 及 TG 各洩水氣動閥、TRAP 作動是否正常，前後關斷閥是否開啟（包含 DP001~003 的液位控制閥、MS DP001 底排開啟等）。", NodeKind::Task),
    ("10. 檢查 AC 管線進出口閥皆開啟，管線暢通無阻塞。", NodeKind::Task),
    ("11. 檢查 PA、IA、N2 供應正常，各氣動閥 IA 關斷閥開啟。", NodeKind::Task),
    ("12. 檢查引風機、送風機、火焰偵測器冷卻風扇系統是否良好可用。", NodeKind::Task),
    ("13. 檢查各控制系統安全連鎖裝置及其他儀錶設備功能是否良好可用。", NodeKind::Task),
    ("14. 檢查各 Wind box、空氣調節裝置及風門是否定位，且作動正常。", NodeKind::Task),
    ("15. 各輔機設備（如 GAH、IDF、FDF 等）進行回復並送電。", NodeKind::Task),
    ("16. 通知 UDC、主變電預訂起爐時間。", NodeKind::Task),

    ("貳. 起爐前之準備", NodeKind::Milestone),
    ("17. 汽鼓氮封二道關斷閥全關，兩關斷閥中間之洩放閥全開。", NodeKind::Task),
    ("18. 鍋爐補水：以 CD 水逆洗沖放兩次，加水至汽鼓液位計第一顆中間，並加入起爐用藥。", NodeKind::Task),
    ("19. AS 暖管作業：利用另一鍋爐 AS 系統進行暖管作業至 BFG-HTR、SJAE 等前。", NodeKind::Task),
    ("20. BFG-HTR 以 CD 進行加水作業，確認各級溢流閥皆有水滿出後關閉閥件。", NodeKind::Task),
    ("21. BFG-HTR 五道抽真空，真空壓力須達 -0.75 kg/cm2。", NodeKind::Task),
    ("22. Deaerator 補水及加藥作業：進行 Rinse 沖放二次，補 DMW 水至 Normal 水位，並添加中和胺與脫氧劑。", NodeKind::Task),
    ("23. 測試主蒸汽洩水馬達閥作動，將 MS 管線洩水前馬達閥全開、後馬達閥保持 10~20% 開度。", NodeKind::Task),
    ("24. 關閉所有非必要的鍋爐通氣閥，僅保留汽鼓 vent 閥、第二道過熱器後 MS 管線 vent 等特定閥件。", NodeKind::Task),
    ("25. 所有燃氣管線皆已使用 N2 purge。", NodeKind::Task),
    ("26. 啟動空氣預熱器（GAH），檢查油位並進行電、氣動馬達連鎖測試。", NodeKind::Task),

    ("參. 送風", NodeKind::Milestone),
    ("27. 啟動引風機（IDF）並確認各運轉數據正常。", NodeKind::Task),
    ("28. 啟動送風機（FDF）並確認各運轉數據正常。", NodeKind::Task),
    ("29. 調整送風機及引風機進口風門，使爐膛空氣流量保持為全載之 30% 以上，爐膛壓力維持在 -15mmWc 左右。", NodeKind::Task),
    ("30. 啟動火焰偵測器冷卻風扇（FDCF）並確認運轉正常。", NodeKind::Task),

    ("肆. 點火起爐升壓", NodeKind::Milestone),
    ("31. 確定 MFT 條件及爐膛 Purge 條件成立後，進行吹清 5 分鐘。", NodeKind::Task),
    ("32. 燃料管線（NG、M-COG、STBL-COG 及 BFG）持續進行啟用 purge，監測氧氣含量直到 O2 < 1%。", NodeKind::Task),
    ("33. 進行 M-COG U 型水封卸除。", NodeKind::Task),
    ("34. 請 UDC 進行燃料總閥解鎖，依序導入 NG (IGN-NG)、STBL-COG、STBL-NG、Main-COG 及 BFG 至 HTV 前備用。", NodeKind::Task),
    ("35. 點燃 IGN-NG，進行功能測試。", NodeKind::Task),
    ("36. 點燃 STBL-COG，進行功能測試。", NodeKind::Task),
    ("37. 繼續點燃 STBL-COG，按升溫曲線升壓（平均升溫速率控制在 45~55℃/h，總時程控制於 8 小時上下）。", NodeKind::Task),
    ("38. 持續排放取樣點及洩水閥 6 小時（除了 LP 取樣點及洩水閥以外）。", NodeKind::Task),
    ("39. 須注意起爐過程中汽鼓上下金屬溫差不可超過 55℃。", NodeKind::Task),
    ("40. 汽鼓壓力達 1.5kg/cm2G 時，關閉汽鼓 vent 閥及過熱器 vent。", NodeKind::Task),
    ("41. 汽鼓壓力達 5kg/cm2，啟用 CBD 系統並將流量調整至 5t/h。", NodeKind::Task),
    ("42. 汽鼓壓力達 10kg/cm2 時，進行東西側汽鼓玻璃液位計沖放。", NodeKind::Task),
    ("43. BFP 啟動後，依據爐水或冷凝水 pH 值進行清罐劑、中和胺或脫氧劑的添加調整。", NodeKind::Task),

    ("伍. 發電機併聯、鍋爐升載", NodeKind::Milestone),
    ("44. 通知主變電，預計發電機併聯時間。", NodeKind::Task),
    ("45. 配合發電機併聯，漸將 MS drain 全關。", NodeKind::Task),
    ("46. 於蒸汽輸出達 20 T/H 以上時，開啟噴水控制閥 Block-Valve。", NodeKind::Task),
    ("47. 點燃 BFG，進行功能測試。", NodeKind::Task),
    ("48. 配合 TG 升載，加點燃燒器及燃料。", NodeKind::Task),
    ("49. 當 CEMS O2 數值低於 8% 以下，需將 CEMS 切換為正常運轉狀態。", NodeKind::Task),
];

/// Boiler start-up procedure: a single column of milestones and tasks,
/// laid out like an imported checklist.
pub fn boiler_sop() -> Flow {
    let mut flow = Flow::with_id("boiler-sop", "鍋爐起爐標準作業程序");
    flow.description = Some("Boiler Start-up Standard Operating Procedure".to_string());

    for (index, (label, kind)) in BOILER_STEPS.iter().enumerate() {
        let id = format!("node-{}", index);
        flow.nodes.push(
            Node::new(id.clone(), *label, *kind, IMPORT_X, IMPORT_TOP + index as f64 * IMPORT_ROW_SPACING)
                .with_size(IMPORT_NODE_WIDTH, IMPORT_NODE_HEIGHT),
        );
        if index > 0 {
            flow.edges.push(Edge::new(format!("edge-{}", index), format!("node-{}", index - 1), id));
        }
    }
    flow
}

/// Two parallel research/design branches joining at a review milestone.
pub fn website_redesign() -> Flow {
    let mut flow = Flow::with_id("1", "Website Redesign Flow");
    flow.description = Some("Main workflow for the Q4 redesign project".to_string());
    flow.nodes = vec![
        Node::new("start", "Start: Project Kick-off", NodeKind::Start, 80.0, 40.0).with_status(NodeStatus::Completed),
        Node::new("t1", "Task 1.1: Research Competitors", NodeKind::Task, -30.0, 180.0),
        Node::new("t2", "Task 2.1: Define User Personas", NodeKind::Task, 200.0, 180.0).with_status(NodeStatus::Completed),
        Node::new("t3", "Task 1.2: Analyze Market Trends", NodeKind::Task, -30.0, 320.0),
        Node::new("t4", "Task 2.2: Create Wireframes", NodeKind::Task, 200.0, 320.0),
        Node::new("m1", "Milestone: Initial Design Review", NodeKind::Milestone, 80.0, 460.0),
    ];
    flow.edges = vec![
        Edge::new("e1", "start", "t1"),
        Edge::new("e2", "start", "t2"),
        Edge::new("e3", "t1", "t3"),
        Edge::new("e4", "t2", "t4"),
        Edge::new("e5", "t3", "m1"),
        Edge::new("e6", "t4", "m1"),
    ];
    flow
}

/// A three-step linear checklist.
pub fn weekly_newsletter() -> Flow {
    let mut flow = Flow::with_id("2", "Weekly Newsletter");
    flow.nodes = vec![
        Node::new("n1", "Draft Content", NodeKind::Start, 100.0, 50.0).with_status(NodeStatus::Completed),
        Node::new("n2", "Proofread", NodeKind::Task, 100.0, 200.0),
        Node::new("n3", "Schedule Send", NodeKind::Task, 100.0, 350.0),
    ];
    flow.edges = vec![Edge::new("e1", "n1", "n2"), Edge::new("e2", "n2", "n3")];
    flow
}

/// Sample flows in display order.
pub fn all() -> Vec<Flow> {
    vec![boiler_sop(), website_redesign(), weekly_newsletter()]
}

//! Afternote 命令行工具

use afternote_core::repository::{
    AdminRepository, AfternoteRepository, AuthRepository, FileUploadRepository,
    ReceivedRepository, ReceiverAuthRepository, RemoteAdminRepository, RemoteAfternoteRepository,
    RemoteAuthRepository, RemoteFileUploadRepository, RemoteReceivedRepository,
    RemoteReceiverAuthRepository, RemoteReceiverDocumentUploadRepository,
    RemoteTimeLetterRepository, RemoteUserRepository, TimeLetterRepository, UploadKind,
    UserRepository,
};
use afternote_core::usecase::{
    GetDeliveryVerificationStatus, ReceiverContent, ReviewDecision, ReviewVerification,
    SubmitDeliveryVerification, UploadReceiverDocument, VerifyReceiverAuthCode,
};
use afternote_core::{
    AdminVerificationRequest, AfternoteCategory, ApiClient, ClientConfig, DeliveryConditionType,
    NewAccount, PushSettingsUpdate, ReceiverSession, TimeLetter, TimeLetterList, Tokens,
    VerificationStatus,
};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "afternote")]
#[command(about = "Afternote 客户端工具", long_about = None)]
struct Cli {
    /// 服务器地址（默认读取 AFTERNOTE_SERVER_URL）
    #[arg(short, long)]
    server: Option<String>,

    /// 请求超时（秒）
    #[arg(long)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 校验接收者认证码
    Verify {
        /// 认证码
        #[arg(short, long)]
        code: String,
    },
    /// 上传一份证明材料，输出文件地址
    Upload {
        #[arg(short, long)]
        code: String,
        /// 本地文件路径
        file: PathBuf,
    },
    /// 提交死亡证明与家庭关系证明（可传 URL 或本地文件）
    Submit {
        #[arg(short, long)]
        code: String,
        /// 死亡证明
        #[arg(long)]
        death: String,
        /// 家庭关系证明
        #[arg(long)]
        family: String,
    },
    /// 查询审核状态
    Status {
        #[arg(short, long)]
        code: String,
    },
    /// 查看发送者留言
    Message {
        #[arg(short, long)]
        code: String,
    },
    /// 查看收到的时光信件
    Letters {
        #[arg(short, long)]
        code: String,
        /// 信件接收 ID，指定时显示详情
        #[arg(long)]
        id: Option<i64>,
    },
    /// 查看收到的心情记录
    Records {
        #[arg(short, long)]
        code: String,
        #[arg(long)]
        id: Option<i64>,
    },
    /// 查看收到的 Afternote
    Notes {
        #[arg(short, long)]
        code: String,
        #[arg(long)]
        id: Option<i64>,
    },
    /// 用户登录
    Login {
        /// 邮箱
        #[arg(short, long)]
        email: String,
        /// 密码
        #[arg(short, long)]
        password: String,
        /// Token 文件路径
        #[arg(short, long, default_value = ".token")]
        token_file: PathBuf,
    },
    /// 用户登出
    Logout {
        #[arg(short, long, default_value = ".token")]
        token_file: PathBuf,
    },
    /// 管理员审核
    Admin {
        #[arg(short, long, default_value = ".token")]
        token_file: PathBuf,
        #[command(subcommand)]
        action: AdminAction,
    },
    /// 查看或修改发送条件
    Condition {
        #[arg(short, long, default_value = ".token")]
        token_file: PathBuf,
        #[command(subcommand)]
        action: ConditionAction,
    },
    /// 查看已登记的接收者
    Receivers {
        #[arg(short, long, default_value = ".token")]
        token_file: PathBuf,
        /// 用户 ID
        #[arg(short, long)]
        user_id: i64,
        /// 接收者 ID，指定时显示详情
        #[arg(long)]
        receiver_id: Option<i64>,
        /// 与 --receiver-id 一起使用，列出该接收者可见的每日问答
        #[arg(long)]
        questions: bool,
    },
    /// 发送邮箱验证码
    EmailCode {
        #[arg(short, long)]
        email: String,
    },
    /// 校验邮箱验证码并注册
    Signup {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        #[arg(short, long)]
        name: String,
        /// 邮箱验证码
        #[arg(short, long)]
        code: String,
    },
    /// 修改密码
    Password {
        #[arg(short, long, default_value = ".token")]
        token_file: PathBuf,
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
    },
    /// 查看或修改推送设置
    Push {
        #[arg(short, long, default_value = ".token")]
        token_file: PathBuf,
        #[arg(short, long)]
        user_id: i64,
        #[arg(long)]
        time_letter: Option<bool>,
        #[arg(long)]
        mind_record: Option<bool>,
        #[arg(long)]
        after_note: Option<bool>,
    },
    /// 管理自己写的时光信件
    MyLetters {
        #[arg(short, long, default_value = ".token")]
        token_file: PathBuf,
        #[command(subcommand)]
        action: LetterAction,
    },
    /// 管理自己写的 Afternote
    MyNotes {
        #[arg(short, long, default_value = ".token")]
        token_file: PathBuf,
        #[command(subcommand)]
        action: NoteAction,
    },
    /// 查看某位接收者已收到的内容
    Delivered {
        #[arg(short, long, default_value = ".token")]
        token_file: PathBuf,
        receiver_id: i64,
    },
    /// 上传图片或文件（需要登录）
    UploadFile {
        #[arg(short, long, default_value = ".token")]
        token_file: PathBuf,
        #[arg(long, value_enum, default_value_t = FileKind::File)]
        kind: FileKind,
        /// 目录：profiles | timeletters | afternotes
        #[arg(short, long)]
        directory: String,
        file: PathBuf,
    },
    /// 健康检查
    Health,
}

#[derive(Subcommand)]
enum AdminAction {
    /// 待审核列表
    List,
    /// 审核详情
    Show { id: i64 },
    /// 批准
    Approve {
        id: i64,
        #[arg(short, long)]
        note: Option<String>,
    },
    /// 拒绝
    Reject {
        id: i64,
        #[arg(short, long)]
        note: Option<String>,
    },
}

#[derive(Subcommand)]
enum LetterAction {
    List,
    Show { id: i64 },
    /// 批量删除
    Delete {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// 临时保存的信件
    Drafts,
    /// 清空临时保存
    ClearDrafts,
    /// 为信件登记接收者
    Share {
        id: i64,
        #[arg(short, long, required = true)]
        receivers: Vec<i64>,
    },
}

#[derive(Subcommand)]
enum NoteAction {
    List {
        #[arg(long, value_enum)]
        category: Option<NoteCategory>,
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        size: u32,
    },
    Show { id: i64 },
    Delete { id: i64 },
}

#[derive(Clone, Copy, ValueEnum)]
enum NoteCategory {
    Social,
    Gallery,
    Playlist,
}

impl From<NoteCategory> for AfternoteCategory {
    fn from(category: NoteCategory) -> Self {
        match category {
            NoteCategory::Social => AfternoteCategory::Social,
            NoteCategory::Gallery => AfternoteCategory::Gallery,
            NoteCategory::Playlist => AfternoteCategory::Playlist,
        }
    }
}

#[derive(Subcommand)]
enum ConditionAction {
    Show,
    Set {
        #[arg(value_enum)]
        condition: ConditionKind,
        /// 不活跃天数（inactivity）
        #[arg(long)]
        days: Option<u32>,
        /// 指定日期 YYYY-MM-DD（specific-date）
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ConditionKind {
    None,
    DeathCertificate,
    Inactivity,
    SpecificDate,
}

impl From<ConditionKind> for DeliveryConditionType {
    fn from(kind: ConditionKind) -> Self {
        match kind {
            ConditionKind::None => DeliveryConditionType::None,
            ConditionKind::DeathCertificate => DeliveryConditionType::DeathCertificate,
            ConditionKind::Inactivity => DeliveryConditionType::Inactivity,
            ConditionKind::SpecificDate => DeliveryConditionType::SpecificDate,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FileKind {
    Image,
    File,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(server) = cli.server {
        config.server_url = server;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout = timeout;
    }
    debug!("Using server {} (timeout {}s)", config.server_url, config.timeout);
    let client = ApiClient::new(config)?;

    match cli.command {
        Commands::Verify { code } => do_verify(&client, &code).await?,
        Commands::Upload { code, file } => do_upload(&client, &code, &file).await?,
        Commands::Submit { code, death, family } => {
            do_submit(&client, &code, &death, &family).await?
        }
        Commands::Status { code } => do_status(&client, &code).await?,
        Commands::Message { code } => do_message(&client, &code).await?,
        Commands::Letters { code, id } => do_letters(&client, &code, id).await?,
        Commands::Records { code, id } => do_records(&client, &code, id).await?,
        Commands::Notes { code, id } => do_notes(&client, &code, id).await?,
        Commands::Login {
            email,
            password,
            token_file,
        } => do_login(&client, &email, &password, &token_file).await?,
        Commands::Logout { token_file } => do_logout(&client, &token_file).await?,
        Commands::Admin { token_file, action } => {
            load_tokens(&client, &token_file).await?;
            do_admin(&client, action).await?
        }
        Commands::Condition { token_file, action } => {
            load_tokens(&client, &token_file).await?;
            do_condition(&client, action).await?
        }
        Commands::Receivers {
            token_file,
            user_id,
            receiver_id,
            questions,
        } => {
            load_tokens(&client, &token_file).await?;
            match receiver_id {
                Some(receiver_id) if questions => do_questions(&client, receiver_id).await?,
                _ => do_receivers(&client, user_id, receiver_id).await?,
            }
        }
        Commands::EmailCode { email } => do_email_code(&client, &email).await?,
        Commands::Signup {
            email,
            password,
            name,
            code,
        } => do_signup(&client, email, password, name, &code).await?,
        Commands::Password {
            token_file,
            current,
            new,
        } => {
            load_tokens(&client, &token_file).await?;
            do_password(&client, &current, &new).await?
        }
        Commands::Push {
            token_file,
            user_id,
            time_letter,
            mind_record,
            after_note,
        } => {
            load_tokens(&client, &token_file).await?;
            let update = PushSettingsUpdate {
                time_letter,
                mind_record,
                after_note,
            };
            do_push(&client, user_id, update).await?
        }
        Commands::MyLetters { token_file, action } => {
            load_tokens(&client, &token_file).await?;
            do_my_letters(&client, action).await?
        }
        Commands::MyNotes { token_file, action } => {
            load_tokens(&client, &token_file).await?;
            do_my_notes(&client, action).await?
        }
        Commands::Delivered {
            token_file,
            receiver_id,
        } => {
            load_tokens(&client, &token_file).await?;
            do_delivered(&client, receiver_id).await?
        }
        Commands::UploadFile {
            token_file,
            kind,
            directory,
            file,
        } => {
            load_tokens(&client, &token_file).await?;
            do_upload_file(&client, kind, &directory, &file).await?
        }
        Commands::Health => do_health(&client).await?,
    }

    Ok(())
}

fn receiver_auth(client: &ApiClient) -> Arc<dyn ReceiverAuthRepository> {
    Arc::new(RemoteReceiverAuthRepository::new(client.clone()))
}

fn status_label(status: &VerificationStatus) -> &str {
    match status {
        VerificationStatus::Pending => "审核中",
        VerificationStatus::Approved => "已通过",
        VerificationStatus::Rejected => "已拒绝",
        VerificationStatus::Unknown(raw) => raw.as_str(),
    }
}

/// 校验认证码并返回已填充的会话
async fn open_session(client: &ApiClient, code: &str) -> anyhow::Result<ReceiverContent> {
    let repository = receiver_auth(client);
    let session = ReceiverSession::new();
    VerifyReceiverAuthCode::new(repository.clone(), session.clone())
        .execute(code)
        .await?;
    Ok(ReceiverContent::new(repository, session))
}

async fn do_verify(client: &ApiClient, code: &str) -> anyhow::Result<()> {
    println!("正在校验认证码...");

    let session = ReceiverSession::new();
    let result = VerifyReceiverAuthCode::new(receiver_auth(client), session.clone())
        .execute(code)
        .await?;

    println!("校验成功!");
    println!("接收者ID: {}", result.receiver_id);
    if let Some(name) = &result.receiver_name {
        println!("接收者: {}", name);
    }
    if let Some(sender) = session.sender_name().await {
        println!("发送者: {}", sender);
    }
    if let Some(relation) = &result.relation {
        println!("关系: {}", relation);
    }

    Ok(())
}

async fn do_upload(client: &ApiClient, code: &str, file: &Path) -> anyhow::Result<()> {
    println!("正在上传: {}", file.display());

    let url = document_uploader(client).execute(code, file).await?;

    println!("上传成功!");
    println!("文件地址: {}", url);

    Ok(())
}

fn document_uploader(client: &ApiClient) -> UploadReceiverDocument {
    UploadReceiverDocument::new(Arc::new(RemoteReceiverDocumentUploadRepository::new(
        client.clone(),
        receiver_auth(client),
    )))
}

/// URL 原样使用，否则视为本地文件先上传
async fn resolve_document(
    uploader: &UploadReceiverDocument,
    code: &str,
    value: &str,
) -> anyhow::Result<String> {
    if value.starts_with("https://") || value.starts_with("http://") {
        return Ok(value.to_string());
    }
    println!("正在上传: {}", value);
    let url = uploader.execute(code, Path::new(value)).await?;
    println!("文件地址: {}", url);
    Ok(url)
}

async fn do_submit(
    client: &ApiClient,
    code: &str,
    death: &str,
    family: &str,
) -> anyhow::Result<()> {
    let uploader = document_uploader(client);
    let death_url = resolve_document(&uploader, code, death)
        .await
        .context("死亡证明上传失败")?;
    let family_url = resolve_document(&uploader, code, family)
        .await
        .context("家庭关系证明上传失败")?;

    println!("正在提交证明材料...");
    SubmitDeliveryVerification::new(receiver_auth(client))
        .execute(code, &death_url, &family_url)
        .await?;

    println!("提交成功! 请等待管理员审核");

    Ok(())
}

async fn do_status(client: &ApiClient, code: &str) -> anyhow::Result<()> {
    let status = GetDeliveryVerificationStatus::new(receiver_auth(client))
        .execute(code)
        .await?;

    println!("申请ID: {}", status.id);
    println!("审核状态: {}", status_label(&status.status));
    println!("提交时间: {}", status.created_at);
    if let Some(note) = &status.admin_note {
        println!("管理员备注: {}", note);
    }
    if status.status.allows_resubmission() {
        println!("申请已被拒绝，可重新提交证明材料");
    }

    Ok(())
}

async fn do_message(client: &ApiClient, code: &str) -> anyhow::Result<()> {
    let content = open_session(client, code).await?;
    let message = content.message().await?;

    println!("来自 {} 的留言:", message.sender_name);
    println!("{}", message.message.as_deref().unwrap_or("（无）"));

    Ok(())
}

async fn do_letters(client: &ApiClient, code: &str, id: Option<i64>) -> anyhow::Result<()> {
    let content = open_session(client, code).await?;

    if let Some(id) = id {
        let letter = content.select_time_letter(id).await?;
        println!("标题: {}", letter.title.as_deref().unwrap_or("（无标题）"));
        if let Some(sender) = &letter.sender_name {
            println!("发送者: {}", sender);
        }
        if let Some(at) = &letter.delivered_at {
            println!("送达时间: {}", at);
        }
        println!();
        println!("{}", letter.content.as_deref().unwrap_or(""));
        for media in &letter.media_list {
            println!("附件: {}", media.media_url);
        }
        return Ok(());
    }

    let page = content.time_letters().await?;
    println!("共 {} 封信件", page.total_count);
    for letter in &page.items {
        println!(
            "[{}] {}{}",
            letter.time_letter_receiver_id,
            letter.title.as_deref().unwrap_or("（无标题）"),
            if letter.is_read { "" } else { " (未读)" }
        );
    }

    Ok(())
}

async fn do_records(client: &ApiClient, code: &str, id: Option<i64>) -> anyhow::Result<()> {
    let content = open_session(client, code).await?;

    if let Some(id) = id {
        let record = content.mind_record_detail(id).await?;
        println!("标题: {}", record.title.as_deref().unwrap_or("（无标题）"));
        if let Some(question) = &record.question {
            println!("问题: {}", question);
        }
        println!();
        println!("{}", record.content.as_deref().unwrap_or(""));
        for image in &record.images {
            println!("图片: {}", image.image_url);
        }
        return Ok(());
    }

    let page = content.mind_records().await?;
    println!("共 {} 条记录", page.total_count);
    for record in &page.items {
        println!(
            "[{}] {} {}",
            record.mind_record_id,
            record.record_date.as_deref().unwrap_or("-"),
            record.title.as_deref().unwrap_or("（无标题）")
        );
    }

    Ok(())
}

async fn do_notes(client: &ApiClient, code: &str, id: Option<i64>) -> anyhow::Result<()> {
    let content = open_session(client, code).await?;

    if let Some(id) = id {
        let note = content.afternote_detail(id).await?;
        println!("标题: {}", note.title.as_deref().unwrap_or("（无标题）"));
        println!("类别: {}", note.category.as_deref().unwrap_or("-"));
        if let Some(method) = &note.process_method {
            println!("处理方式: {}", method);
        }
        for action in &note.actions {
            println!("- {}", action);
        }
        if let Some(message) = &note.leave_message {
            println!("留言: {}", message);
        }
        if let Some(playlist) = &note.playlist {
            for song in &playlist.songs {
                println!("♪ {} - {}", song.title, song.artist);
            }
        }
        return Ok(());
    }

    let page = content.after_notes().await?;
    println!("共 {} 条", page.total_count);
    for note in &page.items {
        println!(
            "[{}] {} {}",
            note.id,
            note.source_type,
            note.title.as_deref().unwrap_or("（无标题）")
        );
    }

    Ok(())
}

async fn do_login(
    client: &ApiClient,
    email: &str,
    password: &str,
    token_file: &Path,
) -> anyhow::Result<()> {
    println!("正在登录用户: {}", email);

    let tokens = RemoteAuthRepository::new(client.clone())
        .login(email, password)
        .await?;

    println!("登录成功!");
    save_tokens(token_file, &tokens)?;
    println!("Token 已保存到 {} 文件", token_file.display());

    Ok(())
}

async fn do_logout(client: &ApiClient, token_file: &Path) -> anyhow::Result<()> {
    println!("正在登出...");

    let tokens = load_tokens(client, token_file).await?;
    let result = RemoteAuthRepository::new(client.clone())
        .logout(&tokens.refresh_token)
        .await;

    // 本地 token 文件无论如何都删除
    let _ = std::fs::remove_file(token_file);
    result?;

    println!("登出成功!");

    Ok(())
}

fn print_verification(request: &AdminVerificationRequest) {
    println!(
        "[{}] {} ({}) → {}  {}  {}",
        request.id,
        request.sender_name,
        request.sender_email,
        request.receiver_name,
        status_label(&request.status),
        request.created_at
    );
}

async fn do_admin(client: &ApiClient, action: AdminAction) -> anyhow::Result<()> {
    let repository = Arc::new(RemoteAdminRepository::new(client.clone()));

    match action {
        AdminAction::List => {
            let pending = repository.get_pending_verifications().await?;
            println!("待审核: {} 条", pending.len());
            for request in &pending {
                print_verification(request);
            }
        }
        AdminAction::Show { id } => {
            let request = repository.get_verification_detail(id).await?;
            print_verification(&request);
            println!("死亡证明: {}", request.death_certificate_url);
            println!("家庭关系证明: {}", request.family_relation_certificate_url);
            if let Some(note) = &request.admin_note {
                println!("备注: {}", note);
            }
        }
        AdminAction::Approve { id, note } => {
            let request = ReviewVerification::new(repository)
                .execute(id, ReviewDecision::Approve, note)
                .await?;
            println!("已批准: {}", request.id);
        }
        AdminAction::Reject { id, note } => {
            let request = ReviewVerification::new(repository)
                .execute(id, ReviewDecision::Reject, note)
                .await?;
            println!("已拒绝: {}", request.id);
        }
    }

    Ok(())
}

async fn do_condition(client: &ApiClient, action: ConditionAction) -> anyhow::Result<()> {
    let repository = RemoteUserRepository::new(client.clone());

    let condition = match action {
        ConditionAction::Show => repository.get_delivery_condition().await?,
        ConditionAction::Set {
            condition,
            days,
            date,
        } => {
            let condition_type = DeliveryConditionType::from(condition);
            if condition_type == DeliveryConditionType::Inactivity && days.is_none() {
                anyhow::bail!("inactivity 需要 --days");
            }
            if condition_type == DeliveryConditionType::SpecificDate && date.is_none() {
                anyhow::bail!("specific-date 需要 --date");
            }
            let updated = repository
                .update_delivery_condition(condition_type, days, date)
                .await?;
            println!("发送条件已更新");
            updated
        }
    };

    println!("发送条件: {}", condition.condition_type);
    if let Some(days) = condition.inactivity_period_days {
        println!("不活跃天数: {}", days);
    }
    if let Some(date) = &condition.specific_date {
        println!("指定日期: {}", date);
    }
    println!(
        "条件已满足: {}",
        if condition.condition_met { "是" } else { "否" }
    );

    Ok(())
}

async fn do_receivers(
    client: &ApiClient,
    user_id: i64,
    receiver_id: Option<i64>,
) -> anyhow::Result<()> {
    let repository = RemoteUserRepository::new(client.clone());

    if let Some(receiver_id) = receiver_id {
        let detail = repository.get_receiver_detail(user_id, receiver_id).await?;
        println!("{} ({})", detail.name, detail.relation);
        if let Some(phone) = &detail.phone {
            println!("电话: {}", phone);
        }
        if let Some(email) = &detail.email {
            println!("邮箱: {}", email);
        }
        println!(
            "每日问答 {} / 时光信件 {} / Afternote {}",
            detail.daily_question_count, detail.time_letter_count, detail.after_note_count
        );
        return Ok(());
    }

    let receivers = repository.get_receivers(user_id).await?;
    println!("接收者: {} 位", receivers.len());
    for receiver in &receivers {
        println!("[{}] {} ({})", receiver.receiver_id, receiver.name, receiver.relation);
    }

    Ok(())
}

async fn do_questions(client: &ApiClient, receiver_id: i64) -> anyhow::Result<()> {
    let page = RemoteUserRepository::new(client.clone())
        .get_receiver_daily_questions(receiver_id, 0, 20)
        .await?;

    for item in &page.items {
        println!("[{}] {}", item.record_date, item.question);
        println!("    {}", item.answer);
    }
    if page.has_next {
        println!("（还有更多）");
    }

    Ok(())
}

async fn do_email_code(client: &ApiClient, email: &str) -> anyhow::Result<()> {
    RemoteAuthRepository::new(client.clone())
        .send_email_code(email)
        .await?;
    println!("验证码已发送到 {}", email);
    Ok(())
}

async fn do_signup(
    client: &ApiClient,
    email: String,
    password: String,
    name: String,
    code: &str,
) -> anyhow::Result<()> {
    let auth = RemoteAuthRepository::new(client.clone());

    if !auth.verify_email(&email, code).await? {
        anyhow::bail!("邮箱验证码错误");
    }
    let account = auth
        .sign_up(NewAccount {
            email,
            password,
            name,
            profile_url: None,
        })
        .await?;

    println!("注册成功!");
    println!("用户ID: {}", account.user_id);
    println!("邮箱: {}", account.email);

    Ok(())
}

async fn do_password(client: &ApiClient, current: &str, new: &str) -> anyhow::Result<()> {
    RemoteAuthRepository::new(client.clone())
        .change_password(current, new)
        .await?;
    println!("密码已修改");
    Ok(())
}

async fn do_push(
    client: &ApiClient,
    user_id: i64,
    update: PushSettingsUpdate,
) -> anyhow::Result<()> {
    let repository = RemoteUserRepository::new(client.clone());

    let settings = if update == PushSettingsUpdate::default() {
        repository.get_push_settings(user_id).await?
    } else {
        let updated = repository.update_push_settings(user_id, update).await?;
        println!("推送设置已更新");
        updated
    };

    let label = |on: bool| if on { "开" } else { "关" };
    println!("时光信件: {}", label(settings.time_letter));
    println!("心情记录: {}", label(settings.mind_record));
    println!("Afternote: {}", label(settings.after_note));

    Ok(())
}

fn print_letter_list(list: &TimeLetterList) {
    println!("共 {} 封信件", list.total_count);
    for letter in &list.letters {
        println!(
            "[{}] {} {} {}",
            letter.id,
            letter.status,
            letter.send_at.as_deref().unwrap_or("-"),
            letter.title.as_deref().unwrap_or("（无标题）")
        );
    }
}

fn print_letter(letter: &TimeLetter) {
    println!("标题: {}", letter.title.as_deref().unwrap_or("（无标题）"));
    println!("状态: {}", letter.status);
    if let Some(at) = &letter.send_at {
        println!("发送时间: {}", at);
    }
    println!();
    println!("{}", letter.content.as_deref().unwrap_or(""));
    for media in &letter.media_list {
        println!("附件: {}", media.media_url);
    }
}

async fn do_my_letters(client: &ApiClient, action: LetterAction) -> anyhow::Result<()> {
    let repository = RemoteTimeLetterRepository::new(client.clone());

    match action {
        LetterAction::List => print_letter_list(&repository.get_time_letters().await?),
        LetterAction::Show { id } => print_letter(&repository.get_time_letter(id).await?),
        LetterAction::Delete { ids } => {
            let count = ids.len();
            repository.delete_time_letters(ids).await?;
            println!("已删除 {} 封信件", count);
        }
        LetterAction::Drafts => {
            print_letter_list(&repository.get_temporary_time_letters().await?)
        }
        LetterAction::ClearDrafts => {
            repository.delete_all_temporary().await?;
            println!("临时保存已清空");
        }
        LetterAction::Share { id, receivers } => {
            let ids = RemoteReceivedRepository::new(client.clone())
                .register_time_letter_receivers(id, receivers, None)
                .await?;
            println!("已登记 {} 位接收者", ids.len());
        }
    }

    Ok(())
}

async fn do_my_notes(client: &ApiClient, action: NoteAction) -> anyhow::Result<()> {
    let repository = RemoteAfternoteRepository::new(client.clone());

    match action {
        NoteAction::List {
            category,
            page,
            size,
        } => {
            let result = repository
                .get_afternotes(category.map(Into::into), page, size)
                .await?;
            for note in &result.items {
                println!(
                    "[{}] {} {} {}",
                    note.afternote_id, note.category, note.title, note.created_at
                );
            }
            if result.has_next {
                println!("（下一页: --page {}）", result.page + 1);
            }
        }
        NoteAction::Show { id } => {
            let note = repository.get_afternote_detail(id).await?;
            println!("标题: {}", note.title);
            println!("类别: {}", note.category);
            if let Some(method) = &note.process_method {
                println!("处理方式: {}", method);
            }
            for action in &note.actions {
                println!("- {}", action);
            }
            for receiver in &note.receivers {
                println!("接收者: {}", receiver.name.as_deref().unwrap_or("-"));
            }
            if let Some(playlist) = &note.playlist {
                for song in &playlist.songs {
                    println!("♪ {} - {}", song.title, song.artist);
                }
            }
        }
        NoteAction::Delete { id } => {
            repository.delete_afternote(id).await?;
            println!("已删除: {}", id);
        }
    }

    Ok(())
}

async fn do_delivered(client: &ApiClient, receiver_id: i64) -> anyhow::Result<()> {
    let repository = RemoteReceivedRepository::new(client.clone());

    let letters = repository.get_time_letters(receiver_id).await?;
    let records = repository.get_mind_records(receiver_id).await?;
    let notes = repository.get_after_notes(receiver_id).await?;

    println!("时光信件: {}", letters.total_count);
    for letter in &letters.items {
        println!(
            "  [{}] {}{}",
            letter.time_letter_id,
            letter.title.as_deref().unwrap_or("（无标题）"),
            if letter.is_read { "" } else { " (未读)" }
        );
    }
    println!("心情记录: {}", records.total_count);
    println!("Afternote: {}", notes.total_count);

    Ok(())
}

async fn do_upload_file(
    client: &ApiClient,
    kind: FileKind,
    directory: &str,
    file: &Path,
) -> anyhow::Result<()> {
    let kind = match kind {
        FileKind::Image => UploadKind::Image,
        FileKind::File => UploadKind::File,
    };
    println!("正在上传: {}", file.display());

    let url = RemoteFileUploadRepository::new(client.clone())
        .upload(kind, directory, file)
        .await?;

    println!("上传成功!");
    println!("文件地址: {}", url);

    Ok(())
}

async fn do_health(client: &ApiClient) -> anyhow::Result<()> {
    let healthy = client.health_check().await?;

    if healthy {
        println!("服务状态: 正常");
    } else {
        println!("服务状态: 异常");
    }

    Ok(())
}

/// token 文件：第一行访问令牌，第二行刷新令牌
fn save_tokens(path: &Path, tokens: &Tokens) -> anyhow::Result<()> {
    std::fs::write(
        path,
        format!("{}\n{}\n", tokens.access_token, tokens.refresh_token),
    )?;
    Ok(())
}

async fn load_tokens(client: &ApiClient, path: &Path) -> anyhow::Result<Tokens> {
    let content = std::fs::read_to_string(path)
        .map_err(|_| anyhow::anyhow!("请先登录（{} 文件不存在）", path.display()))?;
    let mut lines = content.lines().map(str::trim);
    let access_token = lines
        .next()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| anyhow::anyhow!("{} 文件格式错误", path.display()))?
        .to_string();
    let refresh_token = lines.next().unwrap_or_default().to_string();

    let tokens = Tokens {
        access_token,
        refresh_token,
    };
    client.tokens().set(tokens.clone()).await;
    Ok(tokens)
}

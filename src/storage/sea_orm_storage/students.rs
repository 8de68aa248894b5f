use super::SeaOrmStorage;
use crate::entity::prelude::{LeaveBalances, Students};
use crate::entity::students::{ActiveModel, Column};
use crate::entity::leave_balances;
use crate::errors::{LeaveSystemError, Result};
use crate::models::{
    PaginationInfo,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::{StudentListResponse, StudentWithBalance},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建学生档案
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            usn: Set(req.usn),
            name: Set(req.name),
            email: Set(req.email),
            phone: Set(req.phone),
            password_hash: Set(req.password),
            semester: Set(req.semester),
            department: Set(req.department),
            cgpa: Set(req.cgpa),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过 USN 获取学生
    pub async fn get_student_by_usn_impl(&self, usn: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::Usn.eq(usn))
            .one(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生，附当前学期请假余额
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Students::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Usn.contains(&escaped))
                    .add(Column::Name.contains(&escaped))
                    .add(Column::Email.contains(&escaped)),
            );
        }

        // 学期筛选
        if let Some(semester) = query.semester {
            select = select.filter(Column::Semester.eq(semester));
        }

        // 排序：学期倒序，姓名正序
        select = select
            .order_by_desc(Column::Semester)
            .order_by_asc(Column::Name);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("查询学生页数失败: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("查询学生列表失败: {e}")))?;

        // 逐个补充当前学期余额
        let mut items = Vec::with_capacity(students.len());
        for model in students {
            let balance = LeaveBalances::find()
                .filter(leave_balances::Column::StudentId.eq(model.id))
                .filter(leave_balances::Column::Semester.eq(model.semester))
                .one(&self.db)
                .await
                .map_err(|e| {
                    LeaveSystemError::database_operation(format!("查询请假余额失败: {e}"))
                })?;

            items.push(StudentWithBalance {
                student: model.into_student(),
                leave_balance: balance.map(|b| b.into_leave_balance()),
            });
        }

        Ok(StudentListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(email) = update.email {
            model.email = Set(Some(email));
        }

        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }

        if let Some(semester) = update.semester {
            model.semester = Set(semester);
        }

        if let Some(cgpa) = update.cgpa {
            model.cgpa = Set(cgpa);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("更新学生失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// 更新学生密码
    pub async fn update_student_password_impl(
        &self,
        id: i64,
        password_hash: &str,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Students::update_many()
            .col_expr(
                Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| LeaveSystemError::database_operation(format!("更新学生密码失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
